use crate::analysis_error::AnalysisError;
use crate::store::{DATABASE_NAME, USERS_COLLECTION};

use log::debug;
use mongodb::bson::{doc, Bson, Document};
use mongodb::sync::Client;

/// Resolves a username to the canonical account id used inside match
/// documents.
///
/// Looks up exactly one account document by exact username match. The users
/// collection keys accounts by ObjectId, while match documents embed the hex
/// string form of that id; the result is always the string form.
///
/// # Arguments
///
/// * `client` - The document store client.
/// * `username` - The exact username to look up.
///
/// # Returns
///
/// * `Ok(account_id)` - The canonical string form of the account's id.
/// * `Err(AnalysisError::UnknownUsername)` - No account matched the username,
///   or its id had no string form.
/// * `Err(AnalysisError::Store)` - The lookup itself failed.
pub fn resolve_account_id(client: &Client, username: &str) -> Result<String, AnalysisError> {
    let users = client
        .database(DATABASE_NAME)
        .collection::<Document>(USERS_COLLECTION);

    let account = users
        .find_one(doc! { "username": username }, None)?
        .ok_or_else(|| AnalysisError::UnknownUsername(username.to_owned()))?;

    debug!("matched account document for '{}'", username);

    canonical_account_id(&account)
        .ok_or_else(|| AnalysisError::UnknownUsername(username.to_owned()))
}

/// Converts an account document's `_id` into the string form embedded in
/// match documents: ObjectId becomes its 24-character hex form, a string id
/// passes through unchanged.
fn canonical_account_id(account: &Document) -> Option<String> {
    match account.get("_id")? {
        Bson::ObjectId(id) => Some(id.to_hex()),
        Bson::String(id) => Some(id.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn object_id_becomes_hex_string() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let account = doc! { "_id": id, "username": "alice" };

        assert_eq!(
            canonical_account_id(&account).as_deref(),
            Some("507f1f77bcf86cd799439011")
        );
    }

    #[test]
    fn string_id_passes_through() {
        let account = doc! { "_id": "acct-42", "username": "alice" };

        assert_eq!(canonical_account_id(&account).as_deref(), Some("acct-42"));
    }

    #[test]
    fn other_id_types_have_no_canonical_form() {
        let account = doc! { "_id": 42, "username": "alice" };

        assert_eq!(canonical_account_id(&account), None);
    }

    #[test]
    fn missing_id_has_no_canonical_form() {
        let account = doc! { "username": "alice" };

        assert_eq!(canonical_account_id(&account), None);
    }
}
