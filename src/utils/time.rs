use chrono::{DateTime, Utc};

pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

pub fn epoch_to_rfc3339(epoch: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch, 0).map(|dt| dt.to_rfc3339())
}
