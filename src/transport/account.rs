use serde::Serialize;

use crate::domain::{
    CountryCode, DndQuery, NumberStatusQuery, PhoneNumber, SenderId, SenderIdRequest,
};

pub fn encode_balance_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn encode_history_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn encode_sender_ids_query() -> Vec<(String, String)> {
    Vec::new()
}

pub fn encode_number_status_query(request: &NumberStatusQuery) -> Vec<(String, String)> {
    vec![
        (
            PhoneNumber::FIELD.to_owned(),
            request.phone_number().to_string(),
        ),
        (
            CountryCode::FIELD.to_owned(),
            request.country_code().as_str().to_owned(),
        ),
    ]
}

pub fn encode_dnd_query(request: &DndQuery) -> Vec<(String, String)> {
    vec![(
        PhoneNumber::FIELD.to_owned(),
        request.phone_number().to_string(),
    )]
}

/// `sender-id/request` body.
#[derive(Debug, Serialize)]
pub struct SubmitSenderIdBody<'a> {
    sender_id: &'a SenderId,
    usecase: &'a str,
    company: &'a str,
}

pub fn encode_submit_sender_id_body(request: &SenderIdRequest) -> SubmitSenderIdBody<'_> {
    SubmitSenderIdBody {
        sender_id: request.sender_id(),
        usecase: request.usecase(),
        company: request.company(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn account_reads_carry_no_extra_params() {
        assert!(encode_balance_query().is_empty());
        assert!(encode_history_query().is_empty());
        assert!(encode_sender_ids_query().is_empty());
    }

    #[test]
    fn number_status_query_params() {
        let request = NumberStatusQuery::new(
            PhoneNumber::new(1234567890).unwrap(),
            CountryCode::new("ng").unwrap(),
        );
        assert_eq!(
            encode_number_status_query(&request),
            vec![
                ("phone_number".to_owned(), "1234567890".to_owned()),
                ("country_code".to_owned(), "NG".to_owned()),
            ]
        );
    }

    #[test]
    fn dnd_query_params() {
        let request = DndQuery::new(PhoneNumber::new(1234567890).unwrap());
        assert_eq!(
            encode_dnd_query(&request),
            vec![("phone_number".to_owned(), "1234567890".to_owned())]
        );
    }

    #[test]
    fn submit_sender_id_body_fields() {
        let request = SenderIdRequest::new(
            SenderId::new("TestSender").unwrap(),
            "Marketing",
            "TestCompany",
        )
        .unwrap();

        let body = serde_json::to_value(encode_submit_sender_id_body(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "sender_id": "TestSender",
                "usecase": "Marketing",
                "company": "TestCompany",
            })
        );
    }
}
