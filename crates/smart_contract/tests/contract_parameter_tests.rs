// ContractParameter JSON form and construction checks.

use neo_sdk_core::{UInt160, UInt256};
use neo_sdk_smart_contract::{
    ContractError, ContractParameter, ContractParameterType, ContractParameterValue,
};
use num_bigint::BigInt;
use serde_json::json;

#[test]
fn test_json_scalars() {
    let parameter = ContractParameter::integer(BigInt::from(10).pow(30)).with_name("amount");
    assert_eq!(
        serde_json::to_value(&parameter).unwrap(),
        json!({"type": "Integer", "value": "1000000000000000000000000000000", "name": "amount"})
    );

    let parameter = ContractParameter::byte_array(vec![1, 2, 3]);
    assert_eq!(
        parameter.to_json(),
        json!({"type": "ByteArray", "value": "AQID"})
    );

    let parameter = ContractParameter::boolean(true);
    assert_eq!(parameter.to_json(), json!({"type": "Boolean", "value": true}));

    let parameter = ContractParameter::any();
    assert_eq!(parameter.to_json(), json!({"type": "Any", "value": null}));
}

#[test]
fn test_json_hashes_are_big_endian() {
    let hash = UInt160::parse("0xd2a4cff31913016155e38e474a2c06d08be276cf").unwrap();
    let parameter = ContractParameter::hash160(hash);
    assert_eq!(
        parameter.to_json()["value"],
        json!("0xd2a4cff31913016155e38e474a2c06d08be276cf")
    );

    let parameter = ContractParameter::hash256(UInt256::zero());
    let back = ContractParameter::from_json(&parameter.to_json()).unwrap();
    assert_eq!(back, parameter);
}

#[test]
fn test_json_nested_round_trip() {
    let text = r#"{
        "type": "Array",
        "value": [
            {"type": "String", "value": "hello"},
            {"type": "Map", "value": [
                {"key": {"type": "Integer", "value": "1"},
                 "value": {"type": "PublicKey", "value": "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c"}}
            ]},
            {"type": "Signature", "value": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=="}
        ],
        "name": "args"
    }"#;

    let parameter: ContractParameter = serde_json::from_str(text).unwrap();
    assert_eq!(parameter.param_type(), ContractParameterType::Array);
    assert_eq!(parameter.name.as_deref(), Some("args"));

    let ContractParameterValue::Array(items) = &parameter.value else {
        panic!("expected array");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].param_type(), ContractParameterType::Map);
    assert_eq!(items[2].param_type(), ContractParameterType::Signature);

    let reparsed: ContractParameter =
        serde_json::from_str(&serde_json::to_string(&parameter).unwrap()).unwrap();
    assert_eq!(reparsed, parameter);
}

#[test]
fn test_json_rejects_malformed() {
    for bad in [
        json!({"type": "Integer", "value": "12x"}),
        json!({"type": "Boolean", "value": "yes"}),
        json!({"type": "Hash160", "value": "0x1234"}),
        json!({"type": "Unknown", "value": 1}),
        json!({"type": "Void"}),
        json!({"value": 1}),
        json!([1, 2]),
    ] {
        assert!(ContractParameter::from_json(&bad).is_err(), "{bad}");
    }

    let short_key = json!({"type": "PublicKey", "value": "0102"});
    assert_eq!(
        ContractParameter::from_json(&short_key),
        Err(ContractError::InvalidKeyLength(2))
    );
}

#[test]
fn test_conversions() {
    assert_eq!(ContractParameter::from(true), ContractParameter::boolean(true));
    assert_eq!(ContractParameter::from(7i64), ContractParameter::integer(7));
    assert_eq!(ContractParameter::from("x"), ContractParameter::string("x"));
}
