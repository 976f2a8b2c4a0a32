use kestrel_ir::DType;
use test_case::test_case;

use crate::error::Error;
use crate::registry::{KernelEntry, KernelRegistry, registry};
use crate::types::{Backend, DataLayout, Element, KernelKey};
use crate::{KernelContext, Result};

fn noop(_: &mut KernelContext) -> Result<()> {
    Ok(())
}

fn record(ctx: &mut KernelContext) -> Result<()> {
    let value = *ctx.input::<i32>(0)?;
    ctx.push_output(value * 2);
    Ok(())
}

fn key(name: &str) -> KernelKey {
    KernelKey::new(name, Backend::Cpu, DataLayout::Dense, DType::Float32)
}

#[test]
fn test_register_and_launch() {
    let registry = KernelRegistry::new();
    registry.register(key("double"), KernelEntry::new(record)).unwrap();

    let mut ctx = KernelContext::new("double").with_input(21i32);
    registry.launch(&key("double"), &mut ctx).unwrap();
    assert_eq!(ctx.output::<i32>(0), Some(&42));
}

#[test]
fn test_duplicate_registration() {
    let registry = KernelRegistry::new();
    registry.register(key("k"), KernelEntry::new(noop)).unwrap();

    let err = registry.register(key("k"), KernelEntry::new(noop)).unwrap_err();
    assert_eq!(err, Error::DuplicateKernel { key: key("k") });
}

#[test]
fn test_missing_kernel() {
    let err = KernelRegistry::new().get(&key("absent")).unwrap_err();
    assert_eq!(err.to_string(), "no kernel registered for absent(CPU, DENSE, Float32)");
}

#[test_case(DataLayout::Dense ; "dense")]
#[test_case(DataLayout::SparseCoo ; "coo")]
fn test_key_includes_layout(layout: DataLayout) {
    let registry = KernelRegistry::new();
    registry.register(key("k"), KernelEntry::new(noop)).unwrap();

    let other = KernelKey::new("k", Backend::Cpu, layout, DType::Float32);
    assert_eq!(registry.contains(&other), layout == DataLayout::Dense);
}

#[test]
fn test_input_layout_override() {
    let entry = KernelEntry::new(noop)
        .with_input_layout(0, DataLayout::SparseCoo)
        .with_input_layout(0, DataLayout::SparseCsr);
    assert_eq!(entry.input_layout(0), Some(DataLayout::SparseCsr));
    assert_eq!(entry.input_layout(1), None);
}

#[test]
fn test_global_registry_has_builtins() {
    let mut keys = registry().keys_for("addmm_coo_dense_grad");
    keys.sort_by_key(|key| key.dtype);
    let dtypes: Vec<DType> = keys.iter().map(|key| key.dtype).collect();
    assert_eq!(dtypes, [DType::Float32, DType::Float64]);
    assert!(keys.iter().all(|key| key.backend == Backend::Cpu && key.layout == DataLayout::AllLayout));
}

fn typed_noop<T: Element>(_: &mut KernelContext) -> Result<()> {
    Ok(())
}

#[test]
fn test_kernel_entries_one_per_type() {
    let entries = crate::kernel_entries!("typed", Backend::Cpu, DataLayout::Dense, typed_noop, [f32, f64]);
    let dtypes: Vec<DType> = entries.iter().map(|(key, _)| key.dtype).collect();

    assert_eq!(dtypes, [DType::Float32, DType::Float64]);
    assert!(entries.iter().all(|(key, entry)| key.name == "typed" && entry.input_layout(0).is_none()));
}

#[test]
fn test_kernel_entries_setup_applies_to_every_type() {
    let entries = crate::kernel_entries!(
        "typed",
        Backend::Cpu,
        DataLayout::AllLayout,
        typed_noop,
        [f32, f64],
        |entry: KernelEntry| entry.with_input_layout(1, DataLayout::SparseCsr)
    );

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|(_, entry)| entry.input_layout(1) == Some(DataLayout::SparseCsr)));

    let registry = KernelRegistry::new();
    for (key, entry) in entries {
        registry.register(key, entry).unwrap();
    }
    assert_eq!(registry.keys_for("typed").len(), 2);
}
