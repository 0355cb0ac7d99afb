use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::SynapseError;

/// Identifier of the user that owns a node. Carried on the record only to
/// route follow-up API calls.
pub type UserId = String;

/// A node document as the API returns it.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeResponse {
    /// The node's type, e.g. "ACH-US".
    #[serde(rename = "type")]
    pub node_type: Option<String>,

    /// The node's identifier.
    #[serde(rename = "_id")]
    pub id: Option<String>,

    /// Whether the node is active. Deactivated nodes are deindexed.
    #[serde(rename = "is_active")]
    pub is_active: Option<bool>,

    /// Transaction permissions granted to the node, e.g. "CREDIT-AND-DEBIT".
    #[serde(rename = "allowed")]
    pub allowed: Option<String>,

    /// The info block holding most node attributes. A document without one is
    /// malformed.
    #[serde(rename = "info")]
    pub info: InfoBlock,

    /// Supplementary attributes kept outside the info block.
    #[serde(rename = "extra")]
    pub extra: Option<ExtraBlock>,
}

/// The nested info block of a node document.
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoBlock {
    /// Client-assigned name for the node.
    #[serde(rename = "nickname")]
    pub nickname: Option<String>,

    /// The name the underlying account is held under.
    #[serde(rename = "name_on_account")]
    pub name_on_account: Option<String>,

    /// Full legal name of the bank.
    #[serde(rename = "bank_long_name")]
    pub bank_long_name: Option<String>,

    /// Short name of the bank.
    #[serde(rename = "bank_name")]
    pub bank_name: Option<String>,

    /// The account's type within the bank, e.g. "PERSONAL".
    #[serde(rename = "type")]
    pub account_type: Option<String>,

    /// The account's class, e.g. "CHECKING".
    #[serde(rename = "class")]
    pub account_class: Option<String>,

    /// The account number, masked by the service.
    #[serde(rename = "account_num")]
    pub account_number: Option<String>,

    /// The routing number.
    #[serde(rename = "routing_num")]
    pub routing_number: Option<String>,

    /// Identifier of the underlying account at the service.
    #[serde(rename = "account_id")]
    pub account_id: Option<String>,

    /// Branch or account holder address.
    #[serde(rename = "address")]
    pub address: Option<String>,

    /// SWIFT code for wire nodes.
    #[serde(rename = "swift")]
    pub swift: Option<String>,

    /// IFSC code for Indian bank nodes.
    #[serde(rename = "ifsc")]
    pub ifsc: Option<String>,

    /// Intermediary bank details for international wires. Only present on
    /// nodes routed through a correspondent.
    #[serde(rename = "correspondent_info", skip_serializing_if = "Option::is_none")]
    pub correspondent_info: Option<CorrespondentInfoBlock>,

    /// Identity-matching verification results. Only present once the service
    /// has run a match.
    #[serde(rename = "match_info", skip_serializing_if = "Option::is_none")]
    pub match_info: Option<MatchInfoBlock>,

    /// The account balance. Only present on node kinds that carry one.
    #[serde(rename = "balance", skip_serializing_if = "Option::is_none")]
    pub balance: Option<BalanceBlock>,
}

/// Intermediary bank sub-fields for international transfers.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrespondentInfoBlock {
    #[serde(rename = "swift")]
    pub swift: Option<String>,

    #[serde(rename = "bank_name")]
    pub bank_name: Option<String>,

    #[serde(rename = "routing_num")]
    pub routing_number: Option<String>,

    #[serde(rename = "address")]
    pub address: Option<String>,
}

/// Identity-matching verification sub-fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchInfoBlock {
    #[serde(rename = "email_match")]
    pub email_match: Option<String>,

    #[serde(rename = "name_match")]
    pub name_match: Option<String>,

    #[serde(rename = "phonenumber_match")]
    pub phonenumber_match: Option<String>,
}

/// Balance sub-fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceBlock {
    #[serde(rename = "amount")]
    pub amount: Option<Decimal>,

    #[serde(rename = "currency")]
    pub currency: Option<String>,
}

/// Supplementary sub-fields kept outside the info block.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtraBlock {
    /// Client-supplied supplementary identifier.
    #[serde(rename = "supp_id")]
    pub supp_id: Option<String>,

    /// Whether the node is restricted to gateway transactions.
    #[serde(rename = "gateway_restricted")]
    pub gateway_restricted: Option<bool>,
}

/// A flat, in-memory view of a node document.
///
/// Field names are the client-side renaming of the wire vocabulary
/// (`account_num` becomes `account_number` and so on). The optional wire
/// groups flatten into prefixed fields that stay `None` whenever their group
/// is absent from the document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub user_id: UserId,
    pub node_type: Option<String>,
    pub id: Option<String>,
    pub is_active: Option<bool>,
    pub permission: Option<String>,
    pub nickname: Option<String>,
    pub name_on_account: Option<String>,
    pub bank_long_name: Option<String>,
    pub bank_name: Option<String>,
    pub account_type: Option<String>,
    pub account_class: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub account_id: Option<String>,
    pub address: Option<String>,
    pub swift: Option<String>,
    pub ifsc: Option<String>,
    pub correspondent_swift: Option<String>,
    pub correspondent_bank_name: Option<String>,
    pub correspondent_routing_number: Option<String>,
    pub correspondent_address: Option<String>,
    pub email_match: Option<String>,
    pub name_match: Option<String>,
    pub phonenumber_match: Option<String>,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub supp_id: Option<String>,
    pub gateway_restricted: Option<bool>,
}

impl Node {
    /// Build a record from a single node document.
    ///
    /// The document must carry an `info` block; without one the
    /// deserialization error propagates to the caller.
    pub fn from_response(user_id: &str, response: &Value) -> Result<Node, SynapseError> {
        let wire: NodeResponse = serde_json::from_value(response.clone())?;
        let info = wire.info;

        let mut node = Node {
            user_id: user_id.to_string(),
            node_type: wire.node_type,
            id: wire.id,
            is_active: wire.is_active,
            permission: wire.allowed,
            nickname: info.nickname,
            name_on_account: info.name_on_account,
            bank_long_name: info.bank_long_name,
            bank_name: info.bank_name,
            account_type: info.account_type,
            account_class: info.account_class,
            account_number: info.account_number,
            routing_number: info.routing_number,
            account_id: info.account_id,
            address: info.address,
            swift: info.swift,
            ifsc: info.ifsc,
            ..Default::default()
        };

        if let Some(correspondent_info) = info.correspondent_info {
            node.correspondent_swift = correspondent_info.swift;
            node.correspondent_bank_name = correspondent_info.bank_name;
            node.correspondent_routing_number = correspondent_info.routing_number;
            node.correspondent_address = correspondent_info.address;
        }

        if let Some(match_info) = info.match_info {
            node.email_match = match_info.email_match;
            node.name_match = match_info.name_match;
            node.phonenumber_match = match_info.phonenumber_match;
        }

        if let Some(balance) = info.balance {
            node.balance = balance.amount;
            node.currency = balance.currency;
        }

        if let Some(extra) = wire.extra {
            node.supp_id = extra.supp_id;
            node.gateway_restricted = extra.gateway_restricted;
        }

        Ok(node)
    }

    /// Build one record per document, preserving input order.
    pub fn multiple_from_response(user_id: &str, responses: &[Value]) -> Result<Vec<Node>, SynapseError> {
        responses
            .iter()
            .map(|node_data| Node::from_response(user_id, node_data))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn maps_core_fields_and_leaves_absent_groups_unset() {
        let response = json!({
            "type": "ACH-US",
            "_id": "abc",
            "is_active": true,
            "allowed": "CREDIT-AND-DEBIT",
            "info": {
                "nickname": "Checking"
            }
        });

        let node = Node::from_response("user-1", &response).unwrap();

        assert_eq!(node.user_id, "user-1");
        assert_eq!(node.node_type.as_deref(), Some("ACH-US"));
        assert_eq!(node.id.as_deref(), Some("abc"));
        assert_eq!(node.is_active, Some(true));
        assert_eq!(node.permission.as_deref(), Some("CREDIT-AND-DEBIT"));
        assert_eq!(node.nickname.as_deref(), Some("Checking"));

        assert_eq!(node.correspondent_swift, None);
        assert_eq!(node.correspondent_bank_name, None);
        assert_eq!(node.correspondent_routing_number, None);
        assert_eq!(node.correspondent_address, None);
        assert_eq!(node.email_match, None);
        assert_eq!(node.name_match, None);
        assert_eq!(node.phonenumber_match, None);
        assert_eq!(node.balance, None);
        assert_eq!(node.currency, None);
        assert_eq!(node.supp_id, None);
        assert_eq!(node.gateway_restricted, None);
    }

    #[test]
    fn renames_info_fields_into_the_record_vocabulary() {
        let response = json!({
            "type": "ACH-US",
            "_id": "abc",
            "is_active": true,
            "allowed": "CREDIT",
            "info": {
                "nickname": "Primary Checking",
                "name_on_account": "Hermione Granger",
                "bank_long_name": "Chase Bank of America",
                "bank_name": "CHASE",
                "type": "PERSONAL",
                "class": "CHECKING",
                "account_num": "8901",
                "routing_num": "2093",
                "account_id": "8902",
                "address": "PO BOX 85139, RICHMOND, VA",
                "swift": "CHASUS33",
                "ifsc": "YESB0000262"
            }
        });

        let node = Node::from_response("user-1", &response).unwrap();

        assert_eq!(node.account_type.as_deref(), Some("PERSONAL"));
        assert_eq!(node.account_class.as_deref(), Some("CHECKING"));
        assert_eq!(node.account_number.as_deref(), Some("8901"));
        assert_eq!(node.routing_number.as_deref(), Some("2093"));
        assert_eq!(node.account_id.as_deref(), Some("8902"));
        assert_eq!(node.address.as_deref(), Some("PO BOX 85139, RICHMOND, VA"));
        assert_eq!(node.swift.as_deref(), Some("CHASUS33"));
        assert_eq!(node.ifsc.as_deref(), Some("YESB0000262"));
        assert_eq!(node.name_on_account.as_deref(), Some("Hermione Granger"));
        assert_eq!(node.bank_long_name.as_deref(), Some("Chase Bank of America"));
        assert_eq!(node.bank_name.as_deref(), Some("CHASE"));
    }

    #[test]
    fn flattens_optional_groups_when_present() {
        let response = json!({
            "type": "WIRE-INT",
            "_id": "wire-1",
            "is_active": true,
            "allowed": "CREDIT",
            "info": {
                "nickname": "International Wire",
                "correspondent_info": {
                    "swift": "TSIGGRAA",
                    "bank_name": "TSIG",
                    "routing_num": "8974",
                    "address": "1 Athens Way, Athens, Greece"
                },
                "match_info": {
                    "email_match": "not_found",
                    "name_match": "full_match",
                    "phonenumber_match": "not_found"
                },
                "balance": {
                    "amount": 250,
                    "currency": "USD"
                }
            },
            "extra": {
                "supp_id": "ABC124",
                "gateway_restricted": false
            }
        });

        let node = Node::from_response("user-1", &response).unwrap();

        assert_eq!(node.correspondent_swift.as_deref(), Some("TSIGGRAA"));
        assert_eq!(node.correspondent_bank_name.as_deref(), Some("TSIG"));
        assert_eq!(node.correspondent_routing_number.as_deref(), Some("8974"));
        assert_eq!(node.correspondent_address.as_deref(), Some("1 Athens Way, Athens, Greece"));
        assert_eq!(node.email_match.as_deref(), Some("not_found"));
        assert_eq!(node.name_match.as_deref(), Some("full_match"));
        assert_eq!(node.phonenumber_match.as_deref(), Some("not_found"));
        assert_eq!(node.balance, Some(dec!(250)));
        assert_eq!(node.currency.as_deref(), Some("USD"));
        assert_eq!(node.supp_id.as_deref(), Some("ABC124"));
        assert_eq!(node.gateway_restricted, Some(false));
    }

    #[test]
    fn document_without_info_block_is_rejected() {
        let response = json!({
            "type": "ACH-US",
            "_id": "abc",
            "is_active": true,
            "allowed": "CREDIT"
        });

        let result = Node::from_response("user-1", &response);
        assert!(matches!(result, Err(SynapseError::Json(_))));
    }

    #[test]
    fn unknown_document_keys_are_ignored() {
        let response = json!({
            "type": "ACH-US",
            "_id": "abc",
            "is_active": true,
            "allowed": "CREDIT",
            "timeline": [{"date": 1498297390, "note": "Node created."}],
            "info": {
                "nickname": "Checking",
                "document_id": "a4e646b6b95cfb0c"
            }
        });

        let node = Node::from_response("user-1", &response).unwrap();
        assert_eq!(node.nickname.as_deref(), Some("Checking"));
    }

    #[test]
    fn multiple_from_response_preserves_order() {
        let responses = vec![
            json!({"type": "ACH-US", "_id": "a", "is_active": true, "allowed": "CREDIT", "info": {}}),
            json!({"type": "ACH-US", "_id": "b", "is_active": false, "allowed": "LOCKED", "info": {}}),
            json!({"type": "SYNAPSE-US", "_id": "c", "is_active": true, "allowed": "CREDIT-AND-DEBIT", "info": {}}),
        ];

        let nodes = Node::multiple_from_response("user-1", &responses).unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].id.as_deref(), Some("a"));
        assert_eq!(nodes[1].id.as_deref(), Some("b"));
        assert_eq!(nodes[2].id.as_deref(), Some("c"));
    }

    #[test]
    fn multiple_from_response_on_empty_input_is_empty() {
        let nodes = Node::multiple_from_response("user-1", &[]).unwrap();
        assert!(nodes.is_empty());
    }
}
