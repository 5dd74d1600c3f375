//! Wire and storage field names.
//!
//! The HTTP payloads and the stored documents share one flat vocabulary, so
//! every layer refers to fields through these constants.

pub const ID: &str = "id";
pub const KIND: &str = "tipo";
pub const NAME: &str = "nomeItem";
pub const DESCRIPTION: &str = "descricao";
pub const CATEGORY: &str = "categoria";
pub const LOCATION: &str = "local";
pub const DATE: &str = "data";
pub const CONTACT_NAME: &str = "nomeContato";
pub const CONTACT_PHONE: &str = "telefone";
pub const CONTACT_EMAIL: &str = "email";
pub const NOTES: &str = "observacoes";
pub const CREATED_AT: &str = "criadoEm";
pub const FOUND_LOCATION: &str = "localEncontrado";
pub const FOUND_DATE: &str = "dataEncontrada";
pub const STORED_AT: &str = "localGuardado";

/// Optional text fields shared by both kinds; absent values read back as `""`.
pub const OPTIONAL_COMMON: [&str; 4] = [CONTACT_NAME, CONTACT_PHONE, CONTACT_EMAIL, NOTES];
