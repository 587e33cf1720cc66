//! Property values and intrinsic functions shared by every resource type.

pub mod intrinsic;
pub mod value;

pub use intrinsic::{
    intrinsic_from_map, make_fn_cidr, make_fn_equals, make_fn_find_in_map, make_fn_get_att,
    make_fn_get_att_string, make_fn_import_value, make_fn_import_value_string, make_fn_join,
    make_fn_select, make_fn_split, make_fn_split_string, make_fn_sub, make_fn_sub_string,
    make_name, make_ref, ref_account_id, ref_no_value, ref_notification_arns, ref_partition,
    ref_region, ref_stack_id, ref_stack_name, Intrinsic, IntrinsicFunction, ACCOUNT_ID,
    NOTIFICATION_ARNS, NO_VALUE, PARTITION, REGION, STACK_ID, STACK_NAME,
};
pub use value::Value;
