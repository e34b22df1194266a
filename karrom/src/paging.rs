//! Incremental page loading
//!
//! A [`PagedList`] accumulates numbered pages (1-based) from a
//! [`PageSource`] in ascending order. At most one page request is
//! outstanding at a time: [`PagedList::begin_next`] hands out a
//! [`PageRequest`] and refuses to issue another until that request is
//! completed or failed. A completion for any other request is ignored, so
//! a stale response can never append out of order.
//!
//! ```ignore
//! use karrom::paging::PagedList;
//!
//! let mut reader = PagedList::for_source(&quran);
//! reader.load_next(&quran)?; // Juz 1
//! reader.load_next(&quran)?; // Juz 2
//! ```

use crate::provider::{HttpClient, ProviderError, QuranClient, Verse, JUZ_COUNT};

/// Ticket for one outstanding page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Something that serves numbered pages.
pub trait PageSource {
    type Item;
    type Error;

    /// Number of pages, numbered `1..=page_count()`.
    fn page_count(&self) -> u32;

    /// Fetches one page.
    fn fetch_page(&self, page: u32) -> Result<Vec<Self::Item>, Self::Error>;
}

impl<C: HttpClient> PageSource for QuranClient<C> {
    type Item = Verse;
    type Error = ProviderError;

    fn page_count(&self) -> u32 {
        JUZ_COUNT.into()
    }

    fn fetch_page(&self, page: u32) -> Result<Vec<Verse>, ProviderError> {
        let juz = u8::try_from(page).map_err(|_| {
            ProviderError::InvalidRequest(format!("juz number {} out of range", page))
        })?;
        self.juz(juz).map(|detail| detail.verses)
    }
}

/// Items accumulated from consecutive pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    loaded_pages: u32,
    page_count: u32,
    in_flight: Option<PageRequest>,
}

impl<T> PagedList<T> {
    /// Creates an empty list over `page_count` pages.
    pub fn new(page_count: u32) -> Self {
        Self {
            items: Vec::new(),
            loaded_pages: 0,
            page_count,
            in_flight: None,
        }
    }

    /// Creates an empty list sized for `source`.
    pub fn for_source<S: PageSource<Item = T>>(source: &S) -> Self {
        Self::new(source.page_count())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of pages appended so far.
    pub fn loaded_pages(&self) -> u32 {
        self.loaded_pages
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Whether a page request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether every page has been appended.
    pub fn is_exhausted(&self) -> bool {
        self.loaded_pages >= self.page_count
    }

    /// Reserves the next page.
    ///
    /// Returns `None` while a request is outstanding or once exhausted.
    pub fn begin_next(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.is_exhausted() {
            return None;
        }
        let request = PageRequest {
            page: self.loaded_pages + 1,
        };
        self.in_flight = Some(request);
        Some(request)
    }

    /// Appends the items of the outstanding request.
    ///
    /// Returns `false`, leaving the list untouched, when `request` is not
    /// the outstanding one.
    pub fn complete(&mut self, request: PageRequest, items: Vec<T>) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.items.extend(items);
        self.loaded_pages = request.page;
        self.in_flight = None;
        true
    }

    /// Releases the outstanding request without appending anything.
    ///
    /// The same page is requested again by the next [`begin_next`](Self::begin_next).
    pub fn fail(&mut self, request: PageRequest) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Fetches and appends the next page from `source`.
    ///
    /// Returns `Ok(false)` when nothing was requested (busy or exhausted).
    pub fn load_next<S>(&mut self, source: &S) -> Result<bool, S::Error>
    where
        S: PageSource<Item = T>,
    {
        let Some(request) = self.begin_next() else {
            return Ok(false);
        };
        match source.fetch_page(request.page) {
            Ok(items) => Ok(self.complete(request, items)),
            Err(e) => {
                self.fail(request);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fixtures::juz_json;
    use crate::provider::MockHttpClient;

    struct Numbers {
        pages: u32,
        fail_page: Option<u32>,
    }

    impl PageSource for Numbers {
        type Item = u32;
        type Error = String;

        fn page_count(&self) -> u32 {
            self.pages
        }

        fn fetch_page(&self, page: u32) -> Result<Vec<u32>, String> {
            if self.fail_page == Some(page) {
                return Err(format!("page {} failed", page));
            }
            Ok(vec![page * 10, page * 10 + 1])
        }
    }

    #[test]
    fn test_pages_append_in_order() {
        let source = Numbers { pages: 3, fail_page: None };
        let mut list = PagedList::for_source(&source);

        assert_eq!(list.load_next(&source), Ok(true));
        assert_eq!(list.load_next(&source), Ok(true));
        assert_eq!(list.items(), &[10, 11, 20, 21]);
        assert_eq!(list.loaded_pages(), 2);
    }

    #[test]
    fn test_exhausted_list_issues_no_request() {
        let source = Numbers { pages: 1, fail_page: None };
        let mut list = PagedList::for_source(&source);

        assert_eq!(list.load_next(&source), Ok(true));
        assert!(list.is_exhausted());
        assert_eq!(list.begin_next(), None);
        assert_eq!(list.load_next(&source), Ok(false));
    }

    #[test]
    fn test_second_request_refused_while_in_flight() {
        let mut list: PagedList<u32> = PagedList::new(5);
        let first = list.begin_next().unwrap();
        assert!(list.is_loading());
        assert_eq!(list.begin_next(), None);

        assert!(list.complete(first, vec![1]));
        assert_eq!(list.begin_next().map(|r| r.page()), Some(2));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut list: PagedList<u32> = PagedList::new(5);
        let first = list.begin_next().unwrap();
        assert!(list.fail(first));

        let retry = list.begin_next().unwrap();
        assert_eq!(retry.page(), 1);
        assert!(!list.complete(PageRequest { page: 2 }, vec![99]));
        assert!(list.items().is_empty());
        assert!(list.complete(retry, vec![1]));
    }

    #[test]
    fn test_failure_keeps_items_and_retries_same_page() {
        let source = Numbers { pages: 3, fail_page: Some(2) };
        let mut list = PagedList::for_source(&source);

        list.load_next(&source).unwrap();
        assert!(list.load_next(&source).is_err());
        assert_eq!(list.items(), &[10, 11]);
        assert!(!list.is_loading());
        assert_eq!(list.begin_next().map(|r| r.page()), Some(2));
    }

    #[test]
    fn test_quran_client_serves_juz_pages() {
        let mock = MockHttpClient::new()
            .with_route("/juz/1", &juz_json(1, 1))
            .with_route("/juz/2", &juz_json(2, 149));
        let quran = QuranClient::new(mock);
        let mut reader = PagedList::for_source(&quran);

        assert_eq!(reader.page_count(), 30);
        reader.load_next(&quran).unwrap();
        reader.load_next(&quran).unwrap();
        assert_eq!(reader.loaded_pages(), 2);
        assert!(reader.items().iter().any(|v| v.juz() == Some(2)));
    }
}
