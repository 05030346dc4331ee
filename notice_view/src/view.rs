use interruption_notices::contracts::NoticeContracts;
use interruption_notices::data_transfer::Notice;
use location_directory::contracts::DirectoryContracts;
use location_directory::data_transfer::{Barangay, BarangayCode, City, CityCode};
use tracing::error;

use crate::selection::{Selection, SelectionError};

/// State behind the notice checker screens.
///
/// All mutation goes through `&mut self`, so there is a single writer and no
/// partially applied update can ever be observed. A failed load keeps the
/// previous value of the affected collection; the loading indicator tracks
/// the notices load only and is cleared whether or not it succeeded.
#[derive(Debug)]
pub struct FilteredNoticeView {
    cities: Vec<City>,
    notices: Vec<Notice>,
    selection: Selection,
    loading: bool,
}

impl FilteredNoticeView {
    pub fn new() -> FilteredNoticeView {
        FilteredNoticeView {
            cities: Vec::new(),
            notices: Vec::new(),
            selection: Selection::default(),
            loading: true,
        }
    }

    /// Loads the location directory and the latest notices concurrently and
    /// applies both outcomes.
    pub async fn initialize(&mut self) {
        let (locations, notices) = tokio::join!(
            DirectoryContracts::list_locations(),
            NoticeContracts::latest_notices()
        );
        self.apply_locations(locations);
        self.apply_notices(notices);
    }

    pub fn apply_locations(&mut self, outcome: anyhow::Result<Vec<City>>) {
        match outcome {
            Ok(cities) => self.cities = cities,
            Err(e) => error!("Error loading the locations: {e:?}"),
        }
    }

    pub fn apply_notices(&mut self, outcome: anyhow::Result<Vec<Notice>>) {
        match outcome {
            Ok(notices) => self.notices = notices,
            Err(e) => error!("Error loading the latest notices: {e:?}"),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_city(&mut self, city: Option<CityCode>) {
        self.selection.select_city(city);
    }

    pub fn select_barangay(&mut self, barangay: Option<BarangayCode>) -> Result<(), SelectionError> {
        self.selection.select_barangay(barangay)
    }

    /// The barangays of the currently selected city, in directory order.
    pub fn available_barangays(&self) -> &[Barangay] {
        match self.selected_city() {
            Some(city) => &city.barangays,
            None => &[],
        }
    }

    pub fn selected_city_name(&self) -> Option<&str> {
        self.selected_city().map(|city| city.name.as_str())
    }

    pub fn selected_barangay_name(&self) -> Option<&str> {
        self.selected_barangay().map(|barangay| barangay.name.as_str())
    }

    /// The notices affecting the selected area, in the order they were
    /// fetched. Empty until both a city and a barangay have been picked.
    pub fn visible_notices(&self) -> Vec<&Notice> {
        let city_name = self.selected_city_name().unwrap_or_default();
        let barangay_name = self.selected_barangay_name().unwrap_or_default();
        NoticeContracts::matching_notices(&self.notices, city_name, barangay_name)
    }

    fn selected_city(&self) -> Option<&City> {
        let code = self.selection.city()?;
        self.cities.iter().find(|city| &city.code == code)
    }

    fn selected_barangay(&self) -> Option<&Barangay> {
        let code = self.selection.barangay()?;
        self.available_barangays()
            .iter()
            .find(|barangay| &barangay.code == code)
    }
}

impl Default for FilteredNoticeView {
    fn default() -> Self {
        FilteredNoticeView::new()
    }
}
