//! Prayer-times provider.
//!
//! # URL Pattern
//!
//! `{base}/timings/{DD-MM-YYYY}?latitude={lat}&longitude={lon}&method={method}`
//!
//! The calculation method is a constant of the API; method 20 is the
//! Indonesian Ministry of Religious Affairs (Kemenag RI) convention.

use chrono::NaiveDate;
use serde::Deserialize;

use super::types::decode_data;
use super::url::join_url;
use crate::coord::Coordinate;
use crate::prayer::PrayerName;
use crate::provider::{HttpClient, ProviderError};

/// Default base URL of the timings API.
pub const DEFAULT_PRAYER_BASE_URL: &str = "https://api.aladhan.com/v1/";

/// Default calculation method (Kemenag RI).
pub const DEFAULT_CALCULATION_METHOD: u8 = 20;

/// Date format used in the timings path.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// The labelled times of one day, as reported by the API.
///
/// Missing labels decode as empty strings and are later treated as
/// malformed times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Timings {
    #[serde(rename = "Imsak", default)]
    pub imsak: String,
    #[serde(rename = "Fajr", default)]
    pub fajr: String,
    #[serde(rename = "Sunrise", default)]
    pub sunrise: String,
    #[serde(rename = "Dhuhr", default)]
    pub dhuhr: String,
    #[serde(rename = "Asr", default)]
    pub asr: String,
    #[serde(rename = "Maghrib", default)]
    pub maghrib: String,
    #[serde(rename = "Isha", default)]
    pub isha: String,
}

impl Timings {
    /// Raw time string for `name`.
    pub fn time_for(&self, name: PrayerName) -> &str {
        match name {
            PrayerName::Imsak => &self.imsak,
            PrayerName::Fajr => &self.fajr,
            PrayerName::Sunrise => &self.sunrise,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TimingsData {
    timings: Timings,
}

/// Client for the prayer timings API.
pub struct PrayerTimesClient<C: HttpClient> {
    http_client: C,
    base_url: String,
    method: u8,
}

impl<C: HttpClient> PrayerTimesClient<C> {
    /// Creates a client against the default API and method.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_PRAYER_BASE_URL)
    }

    /// Creates a client against a custom base URL.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            method: DEFAULT_CALCULATION_METHOD,
        }
    }

    /// Sets the calculation method constant.
    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> u8 {
        self.method
    }

    fn build_url(&self, date: NaiveDate, coordinate: &Coordinate) -> String {
        let path = format!(
            "timings/{}?latitude={}&longitude={}&method={}",
            date.format(DATE_FORMAT),
            coordinate.lat(),
            coordinate.lon(),
            self.method
        );
        join_url(&self.base_url, &path)
    }

    /// Fetches the timings for `date` at `coordinate`.
    pub fn timings(&self, date: NaiveDate, coordinate: &Coordinate) -> Result<Timings, ProviderError> {
        let url = self.build_url(date, coordinate);
        let body = self.http_client.get(&url)?;
        decode_data::<TimingsData>(&url, &body).map(|data| data.timings)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::provider::MockHttpClient;

    pub(crate) const TIMINGS_JSON: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "04:40",
                "Sunrise": "05:55",
                "Dhuhr": "12:00",
                "Asr": "15:20",
                "Sunset": "18:02",
                "Maghrib": "18:05",
                "Isha": "19:15",
                "Imsak": "04:30",
                "Midnight": "00:00"
            },
            "date": {"readable": "01 Jan 2025"}
        }
    }"#;

    fn jakarta() -> Coordinate {
        Coordinate::new(-6.2088, 106.8456).unwrap()
    }

    #[test]
    fn test_url_construction() {
        let client = PrayerTimesClient::new(MockHttpClient::new());
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let url = client.build_url(date, &jakarta());
        assert_eq!(
            url,
            "https://api.aladhan.com/v1/timings/07-03-2025?latitude=-6.2088&longitude=106.8456&method=20"
        );
    }

    #[test]
    fn test_custom_method_in_url() {
        let client = PrayerTimesClient::new(MockHttpClient::new()).with_method(3);
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert!(client.build_url(date, &jakarta()).ends_with("&method=3"));
    }

    #[test]
    fn test_timings_decode() {
        let mock = MockHttpClient::new().with_route("method=20", TIMINGS_JSON);
        let client = PrayerTimesClient::new(mock);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let timings = client.timings(date, &jakarta()).unwrap();
        assert_eq!(timings.time_for(PrayerName::Imsak), "04:30");
        assert_eq!(timings.time_for(PrayerName::Isha), "19:15");
    }

    #[test]
    fn test_missing_label_decodes_empty() {
        let body = r#"{"data": {"timings": {"Fajr": "04:40"}}}"#;
        let mock = MockHttpClient::new().with_route("method=20", body);
        let client = PrayerTimesClient::new(mock);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let timings = client.timings(date, &jakarta()).unwrap();
        assert_eq!(timings.fajr, "04:40");
        assert_eq!(timings.asr, "");
    }
}
