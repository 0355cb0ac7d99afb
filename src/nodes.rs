use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use crate::api_client::NodesApi;
use crate::errors::SynapseError;
use crate::models::node::Node;

/// Flat field set for a node create call.
///
/// Every field is optional; a field left `None` simply never appears in the
/// assembled payload. Construct with a struct literal over
/// `..Default::default()`.
#[derive(Clone, Debug, Default)]
pub struct NodeFields {
    pub nickname: Option<String>,
    pub name_on_account: Option<String>,
    pub bank_name: Option<String>,
    pub address: Option<String>,
    pub swift: Option<String>,
    pub ifsc: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub account_type: Option<String>,
    pub account_class: Option<String>,
    /// Online banking username, sent as `bank_id`.
    pub username: Option<String>,
    /// Online banking password, sent as `bank_pw`.
    pub password: Option<String>,
    pub correspondent_swift: Option<String>,
    pub correspondent_bank_name: Option<String>,
    pub correspondent_routing_number: Option<String>,
    pub correspondent_address: Option<String>,
    pub currency: Option<String>,
    pub supp_id: Option<String>,
    pub gateway_restricted: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateNodePayload {
    #[serde(rename = "type")]
    node_type: String,

    info: InfoPayload,

    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<ExtraPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InfoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    name_on_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bank_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    swift: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ifsc: Option<String>,

    #[serde(rename = "account_num", skip_serializing_if = "Option::is_none")]
    account_number: Option<String>,

    #[serde(rename = "routing_num", skip_serializing_if = "Option::is_none")]
    routing_number: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    account_type: Option<String>,

    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    account_class: Option<String>,

    #[serde(rename = "bank_id", skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    #[serde(rename = "bank_pw", skip_serializing_if = "Option::is_none")]
    password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    correspondent_info: Option<CorrespondentInfoPayload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    balance: Option<BalancePayload>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CorrespondentInfoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    swift: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bank_name: Option<String>,

    #[serde(rename = "routing_num", skip_serializing_if = "Option::is_none")]
    routing_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BalancePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExtraPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    supp_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    gateway_restricted: Option<bool>,
}

/// Assemble the nested create payload from flat field values.
///
/// `node_type` lands verbatim in the payload's `type` slot. A field absent
/// from `fields` is absent from the payload; the `correspondent_info`,
/// `balance` and `extra` sub-maps are omitted entirely when none of their
/// constituents are supplied. The `info` sub-map is always present, even when
/// empty.
pub fn payload_for_create(node_type: &str, fields: &NodeFields) -> Value {
    let correspondent_info = if fields.correspondent_swift.is_some()
        || fields.correspondent_bank_name.is_some()
        || fields.correspondent_routing_number.is_some()
        || fields.correspondent_address.is_some()
    {
        Some(CorrespondentInfoPayload {
            swift: fields.correspondent_swift.clone(),
            bank_name: fields.correspondent_bank_name.clone(),
            routing_number: fields.correspondent_routing_number.clone(),
            address: fields.correspondent_address.clone(),
        })
    } else {
        None
    };

    let balance = fields.currency.clone().map(|currency| BalancePayload {
        currency: Some(currency),
    });

    let extra = if fields.supp_id.is_some() || fields.gateway_restricted.is_some() {
        Some(ExtraPayload {
            supp_id: fields.supp_id.clone(),
            gateway_restricted: fields.gateway_restricted,
        })
    } else {
        None
    };

    let payload = CreateNodePayload {
        node_type: node_type.to_string(),
        info: InfoPayload {
            nickname: fields.nickname.clone(),
            name_on_account: fields.name_on_account.clone(),
            bank_name: fields.bank_name.clone(),
            address: fields.address.clone(),
            swift: fields.swift.clone(),
            ifsc: fields.ifsc.clone(),
            account_number: fields.account_number.clone(),
            routing_number: fields.routing_number.clone(),
            account_type: fields.account_type.clone(),
            account_class: fields.account_class.clone(),
            username: fields.username.clone(),
            password: fields.password.clone(),
            correspondent_info,
            balance,
        },
        extra,
    };

    serde_json::to_value(&payload).expect("Failed to serialize node payload")
}

/// Result of a deactivation call. The shape of the response differs between
/// API versions and both outcomes are success states.
#[derive(Clone, Debug, PartialEq)]
pub enum Deactivation {
    /// api v3.1.1 returns the deactivated node document.
    Deactivated(Node),
    /// api v3.1.0 returns success with no node document.
    Acknowledged,
}

impl Node {
    /// Create a node record in the API and map the stored document back.
    pub async fn create(
        api: &impl NodesApi,
        user_id: &str,
        node_type: &str,
        fields: &NodeFields,
    ) -> Result<Node, SynapseError> {
        let payload = payload_for_create(node_type, fields);
        let response = api.create_node(user_id, &payload).await?;

        let nodes = response
            .get("nodes")
            .and_then(Value::as_array)
            .ok_or(SynapseError::MissingField("nodes"))?;

        let node_data = nodes.first().ok_or(SynapseError::MissingField("nodes"))?;
        Node::from_response(user_id, node_data)
    }

    /// Retrieve every node belonging to a user, in listing order.
    pub async fn all(api: &impl NodesApi, user_id: &str) -> Result<Vec<Node>, SynapseError> {
        let response = api.get_nodes(user_id).await?;

        let nodes = response
            .get("nodes")
            .and_then(Value::as_array)
            .ok_or(SynapseError::MissingField("nodes"))?;

        Node::multiple_from_response(user_id, nodes)
    }

    /// Retrieve a single node by id.
    pub async fn by_id(api: &impl NodesApi, user_id: &str, node_id: &str) -> Result<Node, SynapseError> {
        let response = api.get_node(user_id, node_id).await?;
        Node::from_response(user_id, &response)
    }

    /// Deactivate and deindex the node.
    ///
    /// The node stops appearing in listings and can no longer source new
    /// transactions. Transactions already underway are not cancelled.
    pub async fn deactivate(&self, api: &impl NodesApi) -> Result<Deactivation, SynapseError> {
        let node_id = self.id.as_deref().ok_or(SynapseError::MissingField("_id"))?;
        let response = api.delete_node(&self.user_id, node_id).await?;

        if response.get("_id").is_some() {
            // api v3.1.1
            Ok(Deactivation::Deactivated(Node::from_response(&self.user_id, &response)?))
        } else {
            // api v3.1.0
            Ok(Deactivation::Acknowledged)
        }
    }

    /// Confirm the two microdeposit amounts sent to an ACH-US node, returning
    /// the updated record.
    pub async fn verify_microdeposits(
        &self,
        api: &impl NodesApi,
        amount1: Decimal,
        amount2: Decimal,
    ) -> Result<Node, SynapseError> {
        let node_id = self.id.as_deref().ok_or(SynapseError::MissingField("_id"))?;
        let payload = serde_json::json!({ "micro": [amount1, amount2] });
        let response = api.patch_node(&self.user_id, node_id, &payload).await?;
        Node::from_response(&self.user_id, &response)
    }
}
