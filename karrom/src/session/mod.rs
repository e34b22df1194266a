//! Per-session application state
//!
//! A [`Session`] is the single owner of everything one user session has
//! loaded: the surah list, the open surah, the Juz reader, the prayer
//! schedule, the resolved location and the Asmaul Husna list, plus the
//! search queries and the display language. It is created once at startup
//! and mutated only through its operations.
//!
//! Every fetching operation follows the same rules: the loading flag is set
//! for the duration of the request and cleared afterwards whatever the
//! outcome; a failure is logged at `warn` and returned, and the data loaded
//! before the failure stays in place.
//!
//! # Example
//!
//! ```ignore
//! use karrom::provider::ReqwestClient;
//! use karrom::session::Session;
//!
//! let mut session = Session::new(ReqwestClient::new()?);
//! session.refresh_surah_list()?;
//! session.set_surah_query("baqarah");
//! for surah in session.filtered_surahs() {
//!     println!("{} {}", surah.number, surah.name.transliteration.id);
//! }
//! ```

mod error;
mod settings;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

pub use error::SessionError;
pub use settings::SessionSettings;

use crate::catalog::{bundled_asmaul_husna, AsmaulHusna, AsmaulSource, DailyPrayer, DAILY_PRAYERS};
use crate::coord::KAABA;
use crate::filter::filter;
use crate::locale::{Language, UiStrings};
use crate::location::{Geocoder, LocationProvider, LocationState};
use crate::paging::PagedList;
use crate::prayer::{minutes_since_midnight, minutes_until, next_prayer, PrayerName, PrayerSchedule};
use crate::provider::{
    AsmaulClient, HttpClient, PrayerTimesClient, ProviderError, QuranClient, SurahDetail,
    SurahSummary, Verse,
};
use crate::qibla::{
    great_circle_distance_km, qibla_bearing, CompassSession, DisplayRotation, SensorSource,
};

/// The state of one user session.
pub struct Session<C: HttpClient> {
    quran: QuranClient<Arc<C>>,
    prayer_times: PrayerTimesClient<Arc<C>>,
    asmaul: AsmaulClient<Arc<C>>,

    language: Language,
    asmaul_source: AsmaulSource,

    surah_query: String,
    asmaul_query: String,
    doa_query: String,

    surahs: Vec<SurahSummary>,
    surah_detail: Option<SurahDetail>,
    juz_reader: PagedList<Verse>,
    schedule: Option<PrayerSchedule>,
    location: LocationState,
    asmaul_husna: Vec<AsmaulHusna>,

    loading: bool,
}

impl<C: HttpClient> Session<C> {
    /// Creates a session against the default endpoints.
    pub fn new(http_client: C) -> Self {
        Self::with_settings(http_client, SessionSettings::default())
    }

    /// Creates a session from explicit settings.
    pub fn with_settings(http_client: C, settings: SessionSettings) -> Self {
        Self::from_shared(Arc::new(http_client), settings)
    }

    /// Creates a session over an HTTP client shared with the caller.
    pub fn from_shared(http_client: Arc<C>, settings: SessionSettings) -> Self {
        let quran = QuranClient::with_base_url(Arc::clone(&http_client), settings.quran_url);
        let prayer_times =
            PrayerTimesClient::with_base_url(Arc::clone(&http_client), settings.prayer_url)
                .with_method(settings.method);
        let asmaul = AsmaulClient::with_base_url(http_client, settings.asmaul_url);
        let juz_reader = PagedList::for_source(&quran);

        Self {
            quran,
            prayer_times,
            asmaul,
            language: settings.language,
            asmaul_source: settings.asmaul_source,
            surah_query: String::new(),
            asmaul_query: String::new(),
            doa_query: String::new(),
            surahs: Vec::new(),
            surah_detail: None,
            juz_reader,
            schedule: None,
            location: LocationState::Unknown,
            asmaul_husna: Vec::new(),
            loading: false,
        }
    }

    // ========================================================================
    // Language
    // ========================================================================

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switches between Indonesian and English.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        debug!(language = %self.language, "Language toggled");
        self.language
    }

    /// User-facing strings in the current language.
    pub fn strings(&self) -> &'static UiStrings {
        self.language.strings()
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Runs one provider request with the loading flag raised.
    fn fetch<T>(
        &mut self,
        request: impl FnOnce(&Self) -> Result<T, ProviderError>,
    ) -> Result<T, ProviderError> {
        self.loading = true;
        let result = request(self);
        self.loading = false;
        result
    }

    // ========================================================================
    // Quran
    // ========================================================================

    /// Fetches the surah list, replacing the previous one on success.
    pub fn refresh_surah_list(&mut self) -> Result<usize, SessionError> {
        match self.fetch(|s| s.quran.surah_list()) {
            Ok(surahs) => {
                info!(count = surahs.len(), "Surah list loaded");
                self.surahs = surahs;
                Ok(self.surahs.len())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load surah list");
                Err(e.into())
            }
        }
    }

    /// Fetches one surah with its verses and makes it the open surah.
    pub fn load_surah_detail(&mut self, number: u16) -> Result<&SurahDetail, SessionError> {
        match self.fetch(|s| s.quran.surah_detail(number)) {
            Ok(detail) => {
                info!(surah = number, verses = detail.verses.len(), "Surah loaded");
                Ok(self.surah_detail.insert(detail))
            }
            Err(e) => {
                warn!(surah = number, error = %e, "Failed to load surah");
                Err(e.into())
            }
        }
    }

    /// Appends the next Juz to the reader.
    ///
    /// Returns `Ok(false)` when every Juz is already loaded or a page
    /// request is outstanding.
    pub fn load_next_juz(&mut self) -> Result<bool, SessionError> {
        self.loading = true;
        let result = self.juz_reader.load_next(&self.quran);
        self.loading = false;

        match result {
            Ok(appended) => {
                if appended {
                    info!(
                        juz = self.juz_reader.loaded_pages(),
                        verses = self.juz_reader.items().len(),
                        "Juz loaded"
                    );
                }
                Ok(appended)
            }
            Err(e) => {
                warn!(
                    juz = self.juz_reader.loaded_pages() + 1,
                    error = %e,
                    "Failed to load juz"
                );
                Err(e.into())
            }
        }
    }

    pub fn surahs(&self) -> &[SurahSummary] {
        &self.surahs
    }

    pub fn surah_detail(&self) -> Option<&SurahDetail> {
        self.surah_detail.as_ref()
    }

    pub fn juz_reader(&self) -> &PagedList<Verse> {
        &self.juz_reader
    }

    pub fn set_surah_query(&mut self, query: impl Into<String>) {
        self.surah_query = query.into();
    }

    pub fn surah_query(&self) -> &str {
        &self.surah_query
    }

    /// Surahs matching the current query.
    pub fn filtered_surahs(&self) -> Vec<&SurahSummary> {
        filter(&self.surahs, &self.surah_query)
    }

    // ========================================================================
    // Location and prayer times
    // ========================================================================

    /// Requests a position fix and names it, without fetching anything.
    ///
    /// A failed fix marks the location unavailable unless an earlier fix
    /// is already held, which is then kept.
    pub fn resolve_location<L, G>(
        &mut self,
        provider: &L,
        geocoder: &G,
    ) -> Result<&LocationState, SessionError>
    where
        L: LocationProvider + ?Sized,
        G: Geocoder + ?Sized,
    {
        let coordinate = match provider.current() {
            Ok(coordinate) => coordinate,
            Err(e) => {
                warn!(error = %e, "Location request failed");
                if !self.location.is_resolved() {
                    self.location = LocationState::Unavailable(e.clone());
                }
                return Err(e.into());
            }
        };

        self.location = LocationState::resolve(coordinate, geocoder);
        info!(
            place = self.location.place().unwrap_or_default(),
            lat = coordinate.lat(),
            lon = coordinate.lon(),
            "Location resolved"
        );
        Ok(&self.location)
    }

    /// Resolves the location, then fetches prayer times for `date` there.
    pub fn locate<L, G>(
        &mut self,
        provider: &L,
        geocoder: &G,
        date: NaiveDate,
    ) -> Result<&PrayerSchedule, SessionError>
    where
        L: LocationProvider + ?Sized,
        G: Geocoder + ?Sized,
    {
        self.resolve_location(provider, geocoder)?;
        self.refresh_prayer_times(date)
    }

    /// Fetches the prayer schedule for `date` at the resolved location.
    pub fn refresh_prayer_times(&mut self, date: NaiveDate) -> Result<&PrayerSchedule, SessionError> {
        let Some(coordinate) = self.location.coordinate() else {
            warn!("Prayer times requested without a location");
            return Err(SessionError::NoLocation);
        };

        match self.fetch(|s| s.prayer_times.timings(date, &coordinate)) {
            Ok(timings) => {
                info!(%date, "Prayer times loaded");
                Ok(self.schedule.insert(PrayerSchedule::from_timings(&timings)))
            }
            Err(e) => {
                warn!(%date, error = %e, "Failed to load prayer times");
                Err(e.into())
            }
        }
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn schedule(&self) -> Option<&PrayerSchedule> {
        self.schedule.as_ref()
    }

    /// The prayer after `now`, once a schedule is loaded.
    pub fn next_prayer(&self, now: NaiveTime) -> Option<PrayerName> {
        self.schedule
            .as_ref()
            .map(|schedule| next_prayer(schedule, minutes_since_midnight(now)))
    }

    /// Minutes from `now` until the next prayer, once a schedule is loaded.
    pub fn minutes_until_next(&self, now: NaiveTime) -> Option<u16> {
        self.schedule
            .as_ref()
            .map(|schedule| minutes_until(schedule, minutes_since_midnight(now)))
    }

    // ========================================================================
    // Qibla
    // ========================================================================

    /// Qibla bearing from the resolved location.
    pub fn qibla_bearing(&self) -> Option<f64> {
        self.location.coordinate().map(|c| qibla_bearing(&c))
    }

    /// Distance to the Kaaba from the resolved location.
    pub fn qibla_distance_km(&self) -> Option<f64> {
        self.location
            .coordinate()
            .map(|c| great_circle_distance_km(&c, &KAABA))
    }

    /// Opens a compass session pointing at the qibla from the resolved
    /// location.
    pub fn open_compass<S>(
        &self,
        source: Arc<S>,
        rotation: DisplayRotation,
    ) -> Result<CompassSession<S>, SessionError>
    where
        S: SensorSource + ?Sized,
    {
        let bearing = self.qibla_bearing().ok_or(SessionError::NoLocation)?;
        CompassSession::open(source, bearing, rotation).map_err(|e| {
            warn!(error = %e, "Failed to open compass");
            e.into()
        })
    }

    // ========================================================================
    // Asmaul Husna
    // ========================================================================

    pub fn asmaul_source(&self) -> AsmaulSource {
        self.asmaul_source
    }

    pub fn set_asmaul_source(&mut self, source: AsmaulSource) {
        self.asmaul_source = source;
    }

    /// Loads the 99 names from the configured source.
    pub fn refresh_asmaul(&mut self) -> Result<usize, SessionError> {
        let names = match self.asmaul_source {
            AsmaulSource::Bundled => bundled_asmaul_husna(),
            AsmaulSource::Remote => match self.fetch(|s| s.asmaul.all()) {
                Ok(names) => names,
                Err(e) => {
                    warn!(error = %e, "Failed to load Asmaul Husna");
                    return Err(e.into());
                }
            },
        };

        info!(count = names.len(), source = %self.asmaul_source, "Asmaul Husna loaded");
        self.asmaul_husna = names;
        Ok(self.asmaul_husna.len())
    }

    pub fn asmaul_husna(&self) -> &[AsmaulHusna] {
        &self.asmaul_husna
    }

    pub fn set_asmaul_query(&mut self, query: impl Into<String>) {
        self.asmaul_query = query.into();
    }

    pub fn filtered_asmaul(&self) -> Vec<&AsmaulHusna> {
        filter(&self.asmaul_husna, &self.asmaul_query)
    }

    // ========================================================================
    // Daily prayers
    // ========================================================================

    pub fn daily_prayers(&self) -> &'static [DailyPrayer] {
        &DAILY_PRAYERS
    }

    pub fn set_doa_query(&mut self, query: impl Into<String>) {
        self.doa_query = query.into();
    }

    pub fn filtered_doa(&self) -> Vec<&'static DailyPrayer> {
        filter(&DAILY_PRAYERS, &self.doa_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinate;
    use crate::location::tests::{FailingLocation, NamedPlace};
    use crate::location::{FixedLocation, LocationError, NoGeocoder};
    use crate::provider::fixtures::{
        juz_json, HUSNA_JSON, SURAH_DETAIL_JSON, SURAH_LIST_JSON, TIMINGS_JSON,
    };
    use crate::provider::MockHttpClient;
    use crate::qibla::{ManualSensorSource, SensorEvent, Vector3};

    fn jakarta() -> FixedLocation {
        FixedLocation(Coordinate::new(-6.2088, 106.8456).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn session(mock: MockHttpClient) -> (Session<MockHttpClient>, Arc<MockHttpClient>) {
        let http = Arc::new(mock);
        let session = Session::from_shared(Arc::clone(&http), SessionSettings::default());
        (session, http)
    }

    #[test]
    fn test_surah_list_and_filter() {
        let (mut session, _) = session(MockHttpClient::new().with_route("/surah", SURAH_LIST_JSON));

        assert_eq!(session.refresh_surah_list().unwrap(), 2);
        assert!(!session.is_loading());

        session.set_surah_query("2");
        let hits = session.filtered_surahs();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.transliteration.id, "Al-Baqarah");

        session.set_surah_query("");
        assert_eq!(session.filtered_surahs().len(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let (mut session, _) = session(MockHttpClient::new().with_route("/surah", SURAH_LIST_JSON));
        session.refresh_surah_list().unwrap();

        // Swap in a client that fails every request.
        let failing = Session::from_shared(Arc::new(MockHttpClient::new()), SessionSettings::default());
        let mut session = Session { quran: failing.quran, ..session };

        assert!(session.refresh_surah_list().is_err());
        assert!(!session.is_loading());
        assert_eq!(session.surahs().len(), 2);
    }

    #[test]
    fn test_surah_detail_failure_keeps_open_surah() {
        let (mut session, _) =
            session(MockHttpClient::new().with_route("/surah/1", SURAH_DETAIL_JSON));

        session.load_surah_detail(1).unwrap();
        let err = session.load_surah_detail(2).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Provider(ProviderError::Status { status: 404, .. })
        ));
        assert_eq!(session.surah_detail().unwrap().number, 1);
    }

    #[test]
    fn test_locate_loads_schedule() {
        let (mut session, http) = session(MockHttpClient::new().with_route("method=20", TIMINGS_JSON));

        let schedule = session.locate(&jakarta(), &NamedPlace("Jakarta"), today()).unwrap();
        assert_eq!(schedule.time_of(PrayerName::Asr), "15:20");
        assert_eq!(session.location().place(), Some("Jakarta"));
        assert_eq!(session.next_prayer(at(6, 0)), Some(PrayerName::Dhuhr));
        assert_eq!(session.next_prayer(at(20, 0)), Some(PrayerName::Imsak));
        assert_eq!(session.minutes_until_next(at(11, 0)), Some(60));

        let requests = http.requests.lock();
        assert!(requests[0].contains("timings/01-01-2025?latitude=-6.2088&longitude=106.8456"));
    }

    #[test]
    fn test_resolve_location_makes_no_request() {
        let (mut session, http) = session(MockHttpClient::new());

        let state = session.resolve_location(&jakarta(), &NamedPlace("Jakarta")).unwrap();
        assert_eq!(state.place(), Some("Jakarta"));
        assert!(session.qibla_bearing().is_some());
        assert!(session.schedule().is_none());
        assert_eq!(http.request_count(), 0);
    }

    #[test]
    fn test_locate_failure_marks_unavailable() {
        let (mut session, http) = session(MockHttpClient::new());

        let err = session
            .locate(&FailingLocation(LocationError::PermissionDenied), &NoGeocoder, today())
            .unwrap_err();
        assert_eq!(err, SessionError::Location(LocationError::PermissionDenied));
        assert_eq!(
            session.location(),
            &LocationState::Unavailable(LocationError::PermissionDenied)
        );
        assert_eq!(session.qibla_bearing(), None);
        assert_eq!(
            session.refresh_prayer_times(today()).unwrap_err(),
            SessionError::NoLocation
        );
        assert_eq!(http.request_count(), 0);
    }

    #[test]
    fn test_locate_failure_keeps_earlier_fix() {
        let (mut session, _) = session(MockHttpClient::new().with_route("method=20", TIMINGS_JSON));
        session.locate(&jakarta(), &NoGeocoder, today()).unwrap();

        assert!(session
            .locate(&FailingLocation(LocationError::NoFix), &NoGeocoder, today())
            .is_err());
        assert_eq!(session.location().place(), Some("Lat: -6.21"));
        assert!(session.schedule().is_some());
    }

    #[test]
    fn test_prayer_failure_keeps_location_without_schedule() {
        let (mut session, _) = session(MockHttpClient::new());

        assert!(session.locate(&jakarta(), &NoGeocoder, today()).is_err());
        assert!(session.location().is_resolved());
        assert!(session.schedule().is_none());
        assert_eq!(session.next_prayer(at(6, 0)), None);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_qibla_from_resolved_location() {
        let (mut session, _) = session(MockHttpClient::new().with_route("method=20", TIMINGS_JSON));
        session.locate(&jakarta(), &NoGeocoder, today()).unwrap();

        let bearing = session.qibla_bearing().unwrap();
        assert!((bearing - 295.15).abs() < 0.1, "bearing = {}", bearing);
        let distance = session.qibla_distance_km().unwrap();
        assert!((7800.0..8100.0).contains(&distance), "distance = {}", distance);
    }

    #[test]
    fn test_open_compass_requires_location() {
        let (mut session, _) = session(MockHttpClient::new().with_route("method=20", TIMINGS_JSON));
        let source = Arc::new(ManualSensorSource::default());

        assert!(matches!(
            session.open_compass(source.clone(), DisplayRotation::Rotation0),
            Err(SessionError::NoLocation)
        ));

        session.locate(&jakarta(), &NoGeocoder, today()).unwrap();
        let mut compass = session
            .open_compass(source.clone(), DisplayRotation::Rotation0)
            .unwrap();
        source.emit(SensorEvent::Accelerometer(Vector3::new(0.0, 0.0, 9.81)));
        source.emit(SensorEvent::MagneticField(Vector3::new(0.0, 22.0, -40.0)));

        let reading = compass.take_update().unwrap();
        assert!((reading.pointer_angle - compass.bearing()).abs() < 1e-6);

        drop(compass);
        assert_eq!(source.active_registrations(), 0);
    }

    #[test]
    fn test_asmaul_bundled_needs_no_network() {
        let http = Arc::new(MockHttpClient::new());
        let settings = SessionSettings::default().with_asmaul_source(AsmaulSource::Bundled);
        let mut session = Session::from_shared(Arc::clone(&http), settings);

        assert_eq!(session.refresh_asmaul().unwrap(), 99);
        assert_eq!(http.request_count(), 0);

        session.set_asmaul_query("pengasih");
        assert_eq!(session.filtered_asmaul()[0].index, 1);
    }

    #[test]
    fn test_asmaul_remote_failure_keeps_list() {
        let (mut session, _) =
            session(MockHttpClient::new().with_route("/husna/semua", HUSNA_JSON));
        assert_eq!(session.refresh_asmaul().unwrap(), 3);

        let failing = Session::from_shared(Arc::new(MockHttpClient::new()), SessionSettings::default());
        let mut session = Session { asmaul: failing.asmaul, ..session };
        assert!(session.refresh_asmaul().is_err());
        assert_eq!(session.asmaul_husna().len(), 3);
    }

    #[test]
    fn test_juz_reader_pages() {
        let (mut session, _) = session(
            MockHttpClient::new()
                .with_route("/juz/1", &juz_json(1, 1))
                .with_route("/juz/2", &juz_json(2, 142)),
        );

        assert!(session.load_next_juz().unwrap());
        assert!(session.load_next_juz().unwrap());
        assert!(session.load_next_juz().is_err());
        assert_eq!(session.juz_reader().loaded_pages(), 2);
        assert_eq!(session.juz_reader().items().len(), 2);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_doa_filter_and_language() {
        let (mut session, _) = session(MockHttpClient::new());
        assert_eq!(session.daily_prayers().len(), 20);

        session.set_doa_query("hujan");
        assert_eq!(session.filtered_doa().len(), 1);

        assert_eq!(session.language(), Language::Indonesian);
        assert_eq!(session.toggle_language(), Language::English);
        assert_eq!(session.strings().fajr, "Fajr");
    }
}
