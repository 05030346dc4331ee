use location_directory::data_transfer::{BarangayCode, CityCode};

/// The area the user has picked so far. A barangay can only be held together
/// with the city it belongs to, so clearing or changing the city discards it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Selection {
    #[default]
    NoCity,
    CityOnly {
        city: CityCode,
    },
    CityAndBarangay {
        city: CityCode,
        barangay: BarangayCode,
    },
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("A barangay can only be selected after a city")]
    NoCitySelected,
}

impl Selection {
    pub fn city(&self) -> Option<&CityCode> {
        match self {
            Selection::NoCity => None,
            Selection::CityOnly { city } | Selection::CityAndBarangay { city, .. } => Some(city),
        }
    }

    pub fn barangay(&self) -> Option<&BarangayCode> {
        match self {
            Selection::CityAndBarangay { barangay, .. } => Some(barangay),
            _ => None,
        }
    }

    /// Re-picking the current city keeps the narrower selection; picking a
    /// different one drops back to the city level.
    pub fn select_city(&mut self, city: Option<CityCode>) {
        match city {
            None => *self = Selection::NoCity,
            Some(city) => {
                if self.city() != Some(&city) {
                    *self = Selection::CityOnly { city };
                }
            }
        }
    }

    pub fn select_barangay(
        &mut self,
        barangay: Option<BarangayCode>,
    ) -> Result<(), SelectionError> {
        let city = match self.city() {
            Some(city) => city.clone(),
            None => {
                // Clearing an already absent barangay is fine, picking one
                // without a city is not.
                return match barangay {
                    None => Ok(()),
                    Some(_) => Err(SelectionError::NoCitySelected),
                };
            }
        };
        *self = match barangay {
            Some(barangay) => Selection::CityAndBarangay { city, barangay },
            None => Selection::CityOnly { city },
        };
        Ok(())
    }
}
