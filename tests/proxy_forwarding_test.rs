//! Integration tests for proxy forwarding behavior.
//!
//! These tests check the behavioral contract both wrapper variants share:
//! every call through a wrapper reaches the delegate exactly once, wrappers
//! never mutate after construction, construction is deterministic, and a
//! malformed capability table fails at construction time rather than
//! producing a silent no-op wrapper.

mod common;

use common::{CountingService, capability_table, counting_delegate};
use proxymark::Error;
use proxymark::runtime::service::nop_selector;
use proxymark::runtime::{
    CallArgs, CallSiteProxy, CallValue, Method, MethodTable, NopService,
    ReflectiveProxy,
};
use std::sync::Arc;

#[test]
fn reflective_proxy_forwards_a_thousand_calls() {
    let delegate = counting_delegate();
    let proxy =
        ReflectiveProxy::new(Arc::<CountingService>::clone(&delegate), capability_table())
            .unwrap();

    for _ in 0..1000 {
        proxy.m();
    }

    assert_eq!(delegate.calls(), 1000);
}

#[test]
fn call_site_proxy_forwards_a_thousand_calls() {
    let delegate = counting_delegate();
    let proxy =
        CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &capability_table())
            .unwrap();

    for _ in 0..1000 {
        proxy.m();
    }

    assert_eq!(delegate.calls(), 1000);
}

#[test]
fn both_variants_match_the_direct_call() {
    let delegate = counting_delegate();
    let table = capability_table();

    let reflective =
        ReflectiveProxy::new(Arc::<CountingService>::clone(&delegate), Arc::clone(&table))
            .unwrap();
    let call_site =
        CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &table).unwrap();

    // Same observable outcome for a direct call and for a call through
    // either variant: one completion on the delegate, no panic.
    delegate.m();
    assert_eq!(delegate.calls(), 1);

    reflective.m();
    assert_eq!(delegate.calls(), 2);

    call_site.m();
    assert_eq!(delegate.calls(), 3);
}

#[test]
fn wrappers_are_idempotent_and_keep_their_binding() {
    let delegate = counting_delegate();
    let proxy =
        ReflectiveProxy::new(Arc::<CountingService>::clone(&delegate), capability_table())
            .unwrap();

    // The delegate binding never changes: every call lands on the same
    // counter, one increment per call, regardless of how many came before.
    for expected in 1..=100 {
        proxy.m();
        assert_eq!(delegate.calls(), expected);
    }
}

#[test]
fn construction_is_deterministic() {
    let delegate = counting_delegate();
    let table = capability_table();

    let first = CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &table).unwrap();
    let second = CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &table).unwrap();

    // Two independent wrappers over the same delegate behave identically.
    first.m();
    second.m();
    first.m();
    second.m();

    assert_eq!(delegate.calls(), 4);
}

#[test]
fn malformed_capability_fails_at_construction() {
    let delegate = counting_delegate();
    let empty = MethodTable::new();

    let reflective = ReflectiveProxy::new(
        Arc::<CountingService>::clone(&delegate),
        Arc::new(MethodTable::new()),
    );
    assert_eq!(
        reflective.err(),
        Some(Error::SelectorNotFound {
            selector: "m".to_string()
        })
    );

    let call_site = CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &empty);
    assert_eq!(
        call_site.err(),
        Some(Error::SelectorNotFound {
            selector: "m".to_string()
        })
    );

    // Nothing ever reached the delegate.
    assert_eq!(delegate.calls(), 0);
}

#[test]
fn wrong_arity_capability_fails_at_construction() {
    fn unary_imp(_receiver: &dyn NopService, _args: &CallArgs) -> CallValue {
        CallValue::Void
    }

    let mut table = MethodTable::new();
    table
        .register(Method {
            selector: nop_selector().unwrap(),
            imp: unary_imp,
            arity: 1,
        })
        .unwrap();
    let table = Arc::new(table);

    let delegate = counting_delegate();

    // Registering the operation under the wrong arity is just as malformed
    // as not registering it: both factories fail at construction.
    let reflective =
        ReflectiveProxy::new(Arc::<CountingService>::clone(&delegate), Arc::clone(&table));
    assert_eq!(
        reflective.err(),
        Some(Error::ArgumentCountMismatch {
            expected: 1,
            got: 0
        })
    );

    let call_site = CallSiteProxy::new(Arc::<CountingService>::clone(&delegate), &table);
    assert_eq!(
        call_site.err(),
        Some(Error::ArgumentCountMismatch {
            expected: 1,
            got: 0
        })
    );

    assert_eq!(delegate.calls(), 0);
}

#[test]
fn counting_fixture_observes_direct_calls() {
    let service = CountingService::new();
    service.m();
    service.m();
    assert_eq!(service.calls(), 2);
}
