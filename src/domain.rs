use mongodb::bson::Document;

/// One order as stored in the external collection, kept as the raw field map.
/// The service only reads orders and forwards them; it never builds or
/// updates one.
pub type OrderRecord = Document;
