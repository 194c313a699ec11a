//! Sharing IDs and the process-wide registry across threads.

use std::thread;

use arm_resource_id::{
    register_all, CaseSensitivity, Fields, ParseError, RegisteredType, Registry, RoleAssignmentId,
    ServerId, ValidationError,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<Registry>();
    assert_send_sync::<RegisteredType>();
    assert_send_sync::<Fields>();
    assert_send_sync::<ParseError>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<CaseSensitivity>();
    assert_send_sync::<ServerId>();
    assert_send_sync::<RoleAssignmentId>();
}

#[test]
fn global_registry_is_shared_across_threads() {
    const INPUTS: [&str; 3] = [
        "/subscriptions/sub1/resourcegroups/rg1/providers/microsoft.analysisservices/servers/Server1",
        "/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/rg1/providers/Microsoft.Authorization/ROLEASSIGNMENTS/ra1",
        "/providers/microsoft.management/managementgroups/Group1",
    ];

    let results: Vec<(usize, Vec<String>)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let registry = register_all();
                    let recased = INPUTS
                        .iter()
                        .map(|input| registry.recase(input).unwrap())
                        .collect();
                    (std::ptr::from_ref(registry) as usize, recased)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let expected = [
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.AnalysisServices/servers/Server1",
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Authorization/roleAssignments/ra1",
        "/providers/Microsoft.Management/managementGroups/Group1",
    ];
    let (first, _) = &results[0];
    for (address, recased) in &results {
        assert_eq!(address, first);
        assert_eq!(recased, &expected);
    }
    assert_eq!(std::ptr::from_ref(register_all()) as usize, *first);
}

#[test]
fn parsing_from_many_threads() {
    let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.AnalysisServices/servers/Server1";
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let id = ServerId::parse(input).unwrap();
                assert_eq!(id.id(), input);
            });
        }
    });
}
