//! Integration tests for case conversion.

use inflect::{
    camelize, capitalize, capitalize_if_all_upper, dasherize, humanize, pascalize, replace,
    titleize, to_lower_first, uncapitalize, underscore, Comparison,
};
use insta::assert_snapshot;

#[test]
fn test_active_record_conversions() {
    assert_eq!(camelize("active_record"), "activeRecord");
    assert_eq!(pascalize("active_record"), "ActiveRecord");
    assert_eq!(underscore("ActiveRecord"), "active_record");
    assert_eq!(humanize("active_record"), "Active record");
    assert_eq!(dasherize("active_record"), "active-record");
}

#[test]
fn test_underscore_then_pascalize() {
    for word in ["ActiveRecord", "CustomerInvite", "OrderLineItem"] {
        assert_eq!(pascalize(&underscore(word)), word);
    }
}

#[test]
fn test_camelize_then_underscore() {
    assert_eq!(underscore(&camelize("customer_invite_id")), "customer_invite_id");
}

#[test]
fn test_underscore_snapshots() {
    assert_snapshot!(underscore("HTMLParser"), @"html_parser");
    assert_snapshot!(underscore("getHTTPResponseCode"), @"get_http_response_code");
    assert_snapshot!(underscore("Product Line-Item"), @"product_line_item");
    assert_snapshot!(underscore("version2Upgrade"), @"version2_upgrade");
}

#[test]
fn test_titleize_snapshots() {
    assert_snapshot!(titleize("ActiveRecord"), @"Active Record");
    assert_snapshot!(titleize("customer_invite"), @"Customer Invite");
    assert_snapshot!(titleize("raiders of the lost ark"), @"Raiders Of The Lost Ark");
    assert_snapshot!(titleize("x-men: the last stand"), @"X Men: The Last Stand");
}

#[test]
fn test_humanize_lowercases_tail() {
    assert_eq!(humanize("Customer_ID"), "Customer id");
    assert_eq!(humanize("single"), "Single");
}

#[test]
fn test_first_character_operations() {
    assert_eq!(to_lower_first("Customer"), "customer");
    assert_eq!(uncapitalize("URLPath"), "uRLPath");
    assert_eq!(capitalize("uRLPath"), "Urlpath");
    assert_eq!(capitalize_if_all_upper("URL"), "Url");
    assert_eq!(capitalize_if_all_upper("UrL"), "UrL");
    assert_eq!(capitalize_if_all_upper("I"), "I");
}

#[test]
fn test_empty_input_is_empty_output() {
    let converters: [fn(&str) -> String; 10] = [
        camelize,
        capitalize,
        capitalize_if_all_upper,
        dasherize,
        humanize,
        pascalize,
        titleize,
        to_lower_first,
        uncapitalize,
        underscore,
    ];
    for convert in converters {
        assert_eq!(convert(""), "");
    }
}

#[test]
fn test_replace_scans_left_to_right() {
    assert_eq!(replace("aaa", "aa", "b", Comparison::Ordinal), "ba");
    assert_eq!(
        replace("The cat sat on the CAT mat", "cat", "dog", Comparison::IgnoreCase),
        "The dog sat on the dog mat"
    );
    assert_eq!(
        replace("The cat sat on the CAT mat", "cat", "dog", Comparison::Ordinal),
        "The dog sat on the CAT mat"
    );
}

#[test]
fn test_replace_default_comparison_is_ordinal() {
    assert_eq!(Comparison::default(), Comparison::Ordinal);
}
