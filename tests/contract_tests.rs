//! Integration tests for the validation namespace and its error types,
//! driven through the prelude the way downstream code uses them.

use presence::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    coupon: Optional<String>,
}

fn load(id: Option<u32>, coupon: Option<&str>) -> Result<Order, ContractError> {
    let id = Assert::require_supplied(id, Some("order id is required"))?;
    Ok(Order {
        id,
        coupon: Optional::of_nullable(coupon.map(str::to_string)),
    })
}

fn coupon_code(order: &Order) -> Result<&str, ContractError> {
    Ok(order.coupon.get()?.as_str())
}

#[rstest]
fn test_question_mark_converts_invalid_argument() {
    let error = load(None, None).unwrap_err();
    assert_eq!(error.kind(), ContractErrorKind::InvalidArgument);
    assert_eq!(error.message(), "order id is required");
}

#[rstest]
fn test_illegal_access_converts() {
    let error: ContractError = Assert::new().unwrap_err().into();
    assert_eq!(error.kind(), ContractErrorKind::IllegalAccess);
    assert_eq!(error.to_string(), error.message());
}

#[rstest]
fn test_get_on_empty_propagates() {
    let order = load(Some(7), None).unwrap();
    let error = coupon_code(&order).unwrap_err();
    assert_eq!(
        error,
        ContractError::InvalidArgument(InvalidArgumentError::new("value is null"))
    );
}

#[rstest]
fn test_get_on_present_returns_reference() {
    let order = load(Some(7), Some("SPRING")).unwrap();
    assert_eq!(order.id, 7);
    assert_eq!(coupon_code(&order), Ok("SPRING"));
}

#[rstest]
fn test_error_source_chain() {
    use std::error::Error;

    let error = load(None, None).unwrap_err();
    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "order id is required");
}

#[rstest]
fn test_checked_and_plain_forms_agree_when_callback_is_given() {
    let plain = Optional::of(4).filter(|n| n % 2 == 0);
    let checked = Optional::of(4).try_filter(Some(|n: &i32| n % 2 == 0));
    assert_eq!(checked, Ok(plain));
}

#[rstest]
fn test_trait_object_equality_across_a_collection() {
    let number = Optional::of(1);
    let text = Optional::of("1");
    let nothing = Optional::<u8>::empty();
    let containers: [&dyn AnyOptional; 3] = [&number, &text, &nothing];

    let matches: Vec<bool> = containers
        .iter()
        .map(|container| Optional::of(1).equals(*container))
        .collect();
    assert_eq!(matches, vec![true, false, false]);

    let empty_matches = containers
        .iter()
        .filter(|container| Optional::<String>::empty().equals(**container))
        .count();
    assert_eq!(empty_matches, 1);
}
