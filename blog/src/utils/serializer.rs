pub(crate) mod timestamp_serializer {
    use crate::constants::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(v: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&v.format(TIMESTAMP_FORMAT))
    }
}
