mod list_locations;

/// Facade for the location-directory operations exposed to the views.
pub struct DirectoryContracts;
