use shared_kernel::string_key;

string_key!(CityCode);
string_key!(BarangayCode);

/// One city/municipality from the reference directory, with the barangays it
/// is divided into. Codes are either passed through from the backend (PSGC
/// codes) or synthesized by the normalizer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct City {
    pub code: CityCode,
    pub name: String,
    pub barangays: Vec<Barangay>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Barangay {
    pub code: BarangayCode,
    pub name: String,
}
