use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, GraphEnum, ModelSchema, Parsable, ParseNode,
    PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::StateManagementSetting;

const AUTHORIZED_APPLICATION_RULES_FROM_GROUP_POLICY_MERGED: StoreKey =
    StoreKey::from_static("authorizedApplicationRulesFromGroupPolicyMerged");
const CONNECTION_SECURITY_RULES_FROM_GROUP_POLICY_MERGED: StoreKey =
    StoreKey::from_static("connectionSecurityRulesFromGroupPolicyMerged");
const FIREWALL_ENABLED: StoreKey = StoreKey::from_static("firewallEnabled");
const GLOBAL_PORT_RULES_FROM_GROUP_POLICY_MERGED: StoreKey =
    StoreKey::from_static("globalPortRulesFromGroupPolicyMerged");
const INBOUND_CONNECTIONS_BLOCKED: StoreKey = StoreKey::from_static("inboundConnectionsBlocked");
const INBOUND_NOTIFICATIONS_BLOCKED: StoreKey = StoreKey::from_static("inboundNotificationsBlocked");
const INCOMING_TRAFFIC_BLOCKED: StoreKey = StoreKey::from_static("incomingTrafficBlocked");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");
const OUTBOUND_CONNECTIONS_BLOCKED: StoreKey = StoreKey::from_static("outboundConnectionsBlocked");
const POLICY_RULES_FROM_GROUP_POLICY_MERGED: StoreKey =
    StoreKey::from_static("policyRulesFromGroupPolicyMerged");
const SECURED_PACKET_EXEMPTION_ALLOWED: StoreKey = StoreKey::from_static("securedPacketExemptionAllowed");
const STEALTH_MODE_BLOCKED: StoreKey = StoreKey::from_static("stealthModeBlocked");
const UNICAST_RESPONSES_TO_MULTICAST_BROADCASTS_BLOCKED: StoreKey =
    StoreKey::from_static("unicastResponsesToMulticastBroadcastsBlocked");

const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);

pub static WINDOWS_FIREWALL_NETWORK_PROFILE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.windowsFirewallNetworkProfile",
    parent: None,
    fields: &[
        Field::new("authorizedApplicationRulesFromGroupPolicyMerged", AUTHORIZED_APPLICATION_RULES_FROM_GROUP_POLICY_MERGED, BOOL),
        Field::new("connectionSecurityRulesFromGroupPolicyMerged", CONNECTION_SECURITY_RULES_FROM_GROUP_POLICY_MERGED, BOOL),
        Field::new("firewallEnabled", FIREWALL_ENABLED, FieldKind::Enum(StateManagementSetting::INFO)),
        Field::new("globalPortRulesFromGroupPolicyMerged", GLOBAL_PORT_RULES_FROM_GROUP_POLICY_MERGED, BOOL),
        Field::new("inboundConnectionsBlocked", INBOUND_CONNECTIONS_BLOCKED, BOOL),
        Field::new("inboundNotificationsBlocked", INBOUND_NOTIFICATIONS_BLOCKED, BOOL),
        Field::new("incomingTrafficBlocked", INCOMING_TRAFFIC_BLOCKED, BOOL),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("outboundConnectionsBlocked", OUTBOUND_CONNECTIONS_BLOCKED, BOOL),
        Field::new("policyRulesFromGroupPolicyMerged", POLICY_RULES_FROM_GROUP_POLICY_MERGED, BOOL),
        Field::new("securedPacketExemptionAllowed", SECURED_PACKET_EXEMPTION_ALLOWED, BOOL),
        Field::new("stealthModeBlocked", STEALTH_MODE_BLOCKED, BOOL),
        Field::new("unicastResponsesToMulticastBroadcastsBlocked", UNICAST_RESPONSES_TO_MULTICAST_BROADCASTS_BLOCKED, BOOL),
    ],
};

/// Firewall settings for one network profile (domain, private or public).
#[derive(Debug, Clone)]
pub struct WindowsFirewallNetworkProfile {
    store: Box<dyn BackingStore>,
}

graph_model!(WindowsFirewallNetworkProfile, WINDOWS_FIREWALL_NETWORK_PROFILE_SCHEMA);

macro_rules! flag_accessors {
    ($($get:ident, $set:ident => $key:ident;)+) => {
        $(
            pub fn $get(&self) -> Option<bool> {
                self.store.get_value(&$key)
            }

            pub fn $set(&mut self, value: Option<bool>) {
                self.store.set($key, value.into());
            }
        )+
    };
}

impl WindowsFirewallNetworkProfile {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    flag_accessors! {
        authorized_application_rules_from_group_policy_merged,
            set_authorized_application_rules_from_group_policy_merged => AUTHORIZED_APPLICATION_RULES_FROM_GROUP_POLICY_MERGED;
        connection_security_rules_from_group_policy_merged,
            set_connection_security_rules_from_group_policy_merged => CONNECTION_SECURITY_RULES_FROM_GROUP_POLICY_MERGED;
        global_port_rules_from_group_policy_merged,
            set_global_port_rules_from_group_policy_merged => GLOBAL_PORT_RULES_FROM_GROUP_POLICY_MERGED;
        inbound_connections_blocked, set_inbound_connections_blocked => INBOUND_CONNECTIONS_BLOCKED;
        inbound_notifications_blocked, set_inbound_notifications_blocked => INBOUND_NOTIFICATIONS_BLOCKED;
        incoming_traffic_blocked, set_incoming_traffic_blocked => INCOMING_TRAFFIC_BLOCKED;
        outbound_connections_blocked, set_outbound_connections_blocked => OUTBOUND_CONNECTIONS_BLOCKED;
        policy_rules_from_group_policy_merged,
            set_policy_rules_from_group_policy_merged => POLICY_RULES_FROM_GROUP_POLICY_MERGED;
        secured_packet_exemption_allowed, set_secured_packet_exemption_allowed => SECURED_PACKET_EXEMPTION_ALLOWED;
        stealth_mode_blocked, set_stealth_mode_blocked => STEALTH_MODE_BLOCKED;
        unicast_responses_to_multicast_broadcasts_blocked,
            set_unicast_responses_to_multicast_broadcasts_blocked => UNICAST_RESPONSES_TO_MULTICAST_BROADCASTS_BLOCKED;
    }

    pub fn firewall_enabled(&self) -> Option<StateManagementSetting> {
        self.store.get_enum(&FIREWALL_ENABLED)
    }

    pub fn set_firewall_enabled(&mut self, value: Option<StateManagementSetting>) {
        self.store.set(FIREWALL_ENABLED, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enum_and_flags() {
        let body = br#"{"firewallEnabled":"allowed","stealthModeBlocked":true,"inboundConnectionsBlocked":false}"#;
        let profile: WindowsFirewallNetworkProfile =
            json::parse_as(body, WindowsFirewallNetworkProfile::create_from_discriminator_value).unwrap();
        assert_eq!(profile.firewall_enabled(), Some(StateManagementSetting::Allowed));
        assert_eq!(profile.stealth_mode_blocked(), Some(true));
        assert_eq!(profile.inbound_connections_blocked(), Some(false));
        assert_eq!(profile.incoming_traffic_blocked(), None);
    }

    #[test]
    fn test_write_order_follows_table() {
        let mut profile = WindowsFirewallNetworkProfile::new();
        profile.set_stealth_mode_blocked(Some(true));
        profile.set_firewall_enabled(Some(StateManagementSetting::Blocked));
        assert_eq!(
            json::to_string(&profile).unwrap(),
            json!({"firewallEnabled": "blocked", "stealthModeBlocked": true}).to_string()
        );
    }
}
