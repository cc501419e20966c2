use mongodb::bson::{Binary, Bson, spec::BinarySubtype};
use uuid::Uuid;

/// A `Uuid` in the form the driver stores `Uuid` struct fields: 16 raw bytes,
/// generic binary subtype.
///
/// Use this for `_id` filters and update operators. `to_bson(&uuid)` yields a
/// string, which never matches a stored id.
pub fn uuid_bson(id: Uuid) -> Bson {
    Bson::Binary(Binary {
        subtype: BinarySubtype::Generic,
        bytes: id.as_bytes().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Document, to_raw_document_buf};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Stored {
        #[serde(rename = "_id")]
        id: Uuid,
    }

    #[test]
    fn test_matches_driver_encoding_of_uuid_fields() {
        let id = Uuid::now_v7();
        let raw = to_raw_document_buf(&Stored { id }).unwrap();
        let stored = Document::try_from(&*raw).unwrap();

        assert_eq!(stored.get("_id"), Some(&uuid_bson(id)));
    }

    #[test]
    fn test_is_not_a_string() {
        assert!(matches!(uuid_bson(Uuid::nil()), Bson::Binary(_)));
    }
}
