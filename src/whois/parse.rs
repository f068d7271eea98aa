//! WHOIS response normalization.

use whois_service::WhoisResponse;

use super::WhoisFields;

/// Converts a whois-service response into the report's flat field set.
///
/// Missing sub-values stay `None` and render as "N/A". The queried domain is
/// used as the Domain Name field.
pub(crate) fn convert_response(domain: &str, response: &WhoisResponse) -> WhoisFields {
    let mut fields = WhoisFields {
        domain_name: Some(domain.to_string()),
        ..Default::default()
    };

    let Some(parsed) = &response.parsed_data else {
        return fields;
    };

    fields.registrar = parsed.registrar.clone();
    fields.creation_date = parsed.creation_date.clone();
    fields.expiration_date = parsed.expiration_date.clone();
    fields.last_updated = parsed.updated_date.clone();
    if !parsed.name_servers.is_empty() {
        fields.name_servers = Some(parsed.name_servers.clone());
    }
    if !parsed.status.is_empty() {
        fields.status = Some(parsed.status.clone());
    }
    fields
}
