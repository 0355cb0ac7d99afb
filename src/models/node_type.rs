use std::fmt::{Display, Formatter};
use serde_derive::{Deserialize, Serialize};

/// The kind of financial account a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "ACH-US")]
    AchUs,
    #[serde(rename = "EFT-IND")]
    EftInd,
    #[serde(rename = "EFT-NP")]
    EftNp,
    #[serde(rename = "IOU")]
    Iou,
    #[serde(rename = "RESERVE-US")]
    ReserveUs,
    #[serde(rename = "SYNAPSE-IND")]
    SynapseInd,
    #[serde(rename = "SYNAPSE-NP")]
    SynapseNp,
    #[serde(rename = "SYNAPSE-US")]
    SynapseUs,
    #[serde(rename = "TRIANGLE")]
    Triangle,
    #[serde(rename = "WIRE-INT")]
    WireInt,
    #[serde(rename = "WIRE-US")]
    WireUs,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::AchUs => "ACH-US",
            NodeType::EftInd => "EFT-IND",
            NodeType::EftNp => "EFT-NP",
            NodeType::Iou => "IOU",
            NodeType::ReserveUs => "RESERVE-US",
            NodeType::SynapseInd => "SYNAPSE-IND",
            NodeType::SynapseNp => "SYNAPSE-NP",
            NodeType::SynapseUs => "SYNAPSE-US",
            NodeType::Triangle => "TRIANGLE",
            NodeType::WireInt => "WIRE-INT",
            NodeType::WireUs => "WIRE-US",
        }
    }

    pub fn from_wire(value: &str) -> Option<NodeType> {
        match value {
            "ACH-US" => Some(NodeType::AchUs),
            "EFT-IND" => Some(NodeType::EftInd),
            "EFT-NP" => Some(NodeType::EftNp),
            "IOU" => Some(NodeType::Iou),
            "RESERVE-US" => Some(NodeType::ReserveUs),
            "SYNAPSE-IND" => Some(NodeType::SynapseInd),
            "SYNAPSE-NP" => Some(NodeType::SynapseNp),
            "SYNAPSE-US" => Some(NodeType::SynapseUs),
            "TRIANGLE" => Some(NodeType::Triangle),
            "WIRE-INT" => Some(NodeType::WireInt),
            "WIRE-US" => Some(NodeType::WireUs),
            _ => None,
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
