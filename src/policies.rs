//! Resource attributes that control how CloudFormation creates, updates and deletes
//! a resource. They sit next to `Properties` in the resource envelope.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// What happens to the physical resource when it is removed from the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// What happens to the old physical resource when an update replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateReplacePolicy {
    Delete,
    Retain,
    Snapshot,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourceSignal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UpdatePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_replacing_update: Option<AutoScalingReplacingUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_rolling_update: Option<AutoScalingRollingUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_scheduled_action: Option<AutoScalingScheduledAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_deploy_lambda_alias_update: Option<CodeDeployLambdaAliasUpdate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingReplacingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_replace: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingRollingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instances_in_service: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_successful_instances_percent: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_time: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suspend_processes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_on_resource_signals: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoScalingScheduledAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unmodified_group_size_properties: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CodeDeployLambdaAliasUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_allow_traffic_hook: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_allow_traffic_hook: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_group_name: Option<Value>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deletion_policy_strings() {
        for (policy, expected) in &[
            (DeletionPolicy::Delete, "\"Delete\""),
            (DeletionPolicy::Retain, "\"Retain\""),
            (DeletionPolicy::Snapshot, "\"Snapshot\""),
            (DeletionPolicy::RetainExceptOnCreate, "\"RetainExceptOnCreate\""),
        ] {
            assert_eq!(&serde_json::to_string(policy).unwrap(), expected);
        }
        assert!(serde_json::from_str::<UpdateReplacePolicy>("\"RetainExceptOnCreate\"").is_err());
    }

    #[test]
    fn test_rolling_update() {
        let policy = UpdatePolicy {
            auto_scaling_rolling_update: Some(AutoScalingRollingUpdate {
                max_batch_size: Some(Value::integer(10)),
                min_instances_in_service: Some(Value::integer(11)),
                min_successful_instances_percent: Some(Value::integer(12)),
                pause_time: Some(Value::string("test-pause-time")),
                suspend_processes: vec!["test-suspend1".to_owned(), "test-suspend2".to_owned()],
                wait_on_resource_signals: Some(true),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "AutoScalingRollingUpdate": {
                    "MaxBatchSize": 10,
                    "MinInstancesInService": 11,
                    "MinSuccessfulInstancesPercent": 12,
                    "PauseTime": "test-pause-time",
                    "SuspendProcesses": ["test-suspend1", "test-suspend2"],
                    "WaitOnResourceSignals": true
                }
            })
        );
    }

    #[test]
    fn test_creation_policy_round_trip() {
        let src = r#"{"AutoScalingCreationPolicy":{"MinSuccessfulInstancesPercent":10},"ResourceSignal":{"Count":11,"Timeout":"test-timeout"}}"#;
        let policy: CreationPolicy = serde_json::from_str(src).unwrap();
        assert_eq!(
            policy
                .resource_signal
                .as_ref()
                .and_then(|s| s.count.as_ref())
                .and_then(Value::as_i64),
            Some(11)
        );
        assert_eq!(serde_json::to_string(&policy).unwrap(), src);
    }

    #[test]
    fn test_code_deploy_and_scheduled_action() {
        let policy = UpdatePolicy {
            auto_scaling_replacing_update: Some(AutoScalingReplacingUpdate {
                will_replace: Some(true),
            }),
            auto_scaling_scheduled_action: Some(AutoScalingScheduledAction {
                ignore_unmodified_group_size_properties: Some(true),
            }),
            code_deploy_lambda_alias_update: Some(CodeDeployLambdaAliasUpdate {
                application_name: Some(Value::string("test-application-name")),
                deployment_group_name: Some(Value::string("test-deployment-group-name")),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "AutoScalingReplacingUpdate": {"WillReplace": true},
                "AutoScalingScheduledAction": {"IgnoreUnmodifiedGroupSizeProperties": true},
                "CodeDeployLambdaAliasUpdate": {
                    "ApplicationName": "test-application-name",
                    "DeploymentGroupName": "test-deployment-group-name"
                }
            })
        );
        assert!(serde_json::from_str::<UpdatePolicy>(r#"{"Bogus":{}}"#).is_err());
    }
}
