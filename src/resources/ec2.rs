// Generated by cfnbindgen from the AWS CloudFormation resource specification.
#![allow(unused_imports, non_camel_case_types)]
use std::collections::BTreeMap as Map;
use serde::{Serialize, Deserialize};
use serde_json::Value as Json;
use crate::resource::{ResourceProperties};
use crate::tag::{Tag};
use crate::types::{Value};


/// AWS::EC2::SecurityGroup.Egress
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityGroup_Egress {

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-cidrip
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-cidripv6
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-description
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-destinationprefixlistid
    #[serde(rename = "DestinationPrefixListId", skip_serializing_if = "Option::is_none")]
    pub destination_prefix_list_id: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-destinationsecuritygroupid
    #[serde(rename = "DestinationSecurityGroupId", skip_serializing_if = "Option::is_none")]
    pub destination_security_group_id: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-fromport
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<Value>,

    /// Required: true
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-ipprotocol
    #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-toport
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<Value>,
}


/// AWS::EC2::SecurityGroup.Ingress
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityGroup_Ingress {

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-cidrip
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-cidripv6
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-description
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-fromport
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<Value>,

    /// Required: true
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-ipprotocol
    #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-sourceprefixlistid
    #[serde(rename = "SourcePrefixListId", skip_serializing_if = "Option::is_none")]
    pub source_prefix_list_id: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-sourcesecuritygroupid
    #[serde(rename = "SourceSecurityGroupId", skip_serializing_if = "Option::is_none")]
    pub source_security_group_id: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-sourcesecuritygroupname
    #[serde(rename = "SourceSecurityGroupName", skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-sourcesecuritygroupownerid
    #[serde(rename = "SourceSecurityGroupOwnerId", skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-toport
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<Value>,
}


/// AWS::EC2::SecurityGroup
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityGroup {

    /// Required: true
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-groupdescription
    #[serde(rename = "GroupDescription", skip_serializing_if = "Option::is_none")]
    pub group_description: Option<Value>,

    /// Required: false
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-groupname
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-securitygroupegress
    #[serde(rename = "SecurityGroupEgress", skip_serializing_if = "Option::is_none")]
    pub security_group_egress: Option<Vec<SecurityGroup_Egress>>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-securitygroupingress
    #[serde(rename = "SecurityGroupIngress", skip_serializing_if = "Option::is_none")]
    pub security_group_ingress: Option<Vec<SecurityGroup_Ingress>>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-tags
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Required: false
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group.html#cfn-ec2-securitygroup-vpcid
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<Value>,
}

impl ResourceProperties for SecurityGroup {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::SecurityGroup";
}


/// AWS::EC2::TransitGateway
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitGateway {

    /// Required: false
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-amazonsideasn
    #[serde(rename = "AmazonSideAsn", skip_serializing_if = "Option::is_none")]
    pub amazon_side_asn: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-autoacceptsharedattachments
    #[serde(rename = "AutoAcceptSharedAttachments", skip_serializing_if = "Option::is_none")]
    pub auto_accept_shared_attachments: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-defaultroutetableassociation
    #[serde(rename = "DefaultRouteTableAssociation", skip_serializing_if = "Option::is_none")]
    pub default_route_table_association: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-defaultroutetablepropagation
    #[serde(rename = "DefaultRouteTablePropagation", skip_serializing_if = "Option::is_none")]
    pub default_route_table_propagation: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-description
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-dnssupport
    #[serde(rename = "DnsSupport", skip_serializing_if = "Option::is_none")]
    pub dns_support: Option<Value>,

    /// Required: false
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-multicastsupport
    #[serde(rename = "MulticastSupport", skip_serializing_if = "Option::is_none")]
    pub multicast_support: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-tags
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-transitgatewaycidrblocks
    #[serde(rename = "TransitGatewayCidrBlocks", skip_serializing_if = "Option::is_none")]
    pub transit_gateway_cidr_blocks: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-transitgateway.html#cfn-ec2-transitgateway-vpnecmpsupport
    #[serde(rename = "VpnEcmpSupport", skip_serializing_if = "Option::is_none")]
    pub vpn_ecmp_support: Option<Value>,
}

impl ResourceProperties for TransitGateway {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::TransitGateway";
}


/// AWS::EC2::VPC
///
/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VPC {

    /// Required: false
    /// Update type: Immutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html#cfn-aws-ec2-vpc-cidrblock
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html#cfn-aws-ec2-vpc-enablednshostnames
    #[serde(rename = "EnableDnsHostnames", skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html#cfn-aws-ec2-vpc-enablednssupport
    #[serde(rename = "EnableDnsSupport", skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html#cfn-aws-ec2-vpc-instancetenancy
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Value>,

    /// Required: false
    /// Update type: Mutable
    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html#cfn-aws-ec2-vpc-tags
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceProperties for VPC {
    const RESOURCE_TYPE: &'static str = "AWS::EC2::VPC";
}

