use crate::common::*;

#[doc = "Seconds since the unix epoch, used as the PUTVAL timestamp."]
pub fn current_unix_secs() -> i64 {
    Utc::now().timestamp()
}

#[doc = "Standard Function of Datetime"]
pub fn convert_date_to_str_human(time: DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn unix_secs_is_after_2020() {
        assert!(current_unix_secs() > 1_577_836_800);
    }

    #[test]
    fn human_format() {
        let time: DateTime<Local> = Local
            .with_ymd_and_hms(2024, 10, 2, 9, 5, 7)
            .single()
            .expect("unambiguous local time");

        assert_eq!(convert_date_to_str_human(time), "2024-10-02 09:05:07");
    }
}
