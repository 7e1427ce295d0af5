//! Critical-path analyzer tests.

use riscv_timing::analysis::{analyze, analyze_all};
use riscv_timing::common::TimingError;
use riscv_timing::config::Config;
use riscv_timing::model::{DelayLibrary, TimingModel};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn riscv() -> TimingModel {
    Config::builtin().unwrap().build_model().unwrap()
}

/// Tests the single-cycle processor: the load path is critical.
#[test]
fn test_single_cycle_load_is_critical() {
    let model = riscv();
    let r = analyze(&model, "single-cycle").unwrap();

    let expected = 2.5 + 0.5 + 0.3 + 1.0 + 0.2 + 1.5 + 0.3 + 2.5 + 0.3 + 0.3;
    assert_eq!(r.critical_path, "Load (LD)");
    assert!(close(r.period_ns, expected));
    assert!(close(r.period_ns, 9.4));
    assert!(close(r.frequency_mhz, 1000.0 / r.period_ns));
    assert_eq!(format!("{:.2}", r.frequency_mhz), "106.38");
}

/// Tests the multi-cycle processor: the memory stage is critical.
#[test]
fn test_multi_cycle_memory_stage() {
    let r = analyze(&riscv(), "multi-cycle").unwrap();
    assert_eq!(r.critical_path, "MEMORY");
    assert!(close(r.period_ns, 3.7));
    assert_eq!(format!("{:.2}", r.frequency_mhz), "270.27");
    assert_eq!(r.paths.len(), 5);
    assert_eq!(r.paths[0].name, "FETCH");
}

/// Tests the pipelined processor: IF and MEM tie, IF was registered first.
#[test]
fn test_pipelined_tie_goes_to_first_stage() {
    let model = riscv();
    let r = analyze(&model, "pipelined").unwrap();

    let if_stage = r.paths.iter().find(|p| p.name.starts_with("IF")).unwrap();
    let mem_stage = r.paths.iter().find(|p| p.name.starts_with("MEM")).unwrap();
    assert_eq!(if_stage.total_ns, mem_stage.total_ns);

    assert_eq!(r.critical_path, "IF (Instruction Fetch)");
    assert!(close(r.period_ns, 3.5));
    assert_eq!(format!("{:.2}", r.frequency_mhz), "285.71");
}

/// Tests that the critical path is at least as long as every other path.
#[test]
fn test_maximum_property() {
    for r in analyze_all(&riscv()).unwrap() {
        for p in &r.paths {
            assert!(r.period_ns >= p.total_ns, "{}: {}", r.variant, p.name);
        }
        assert!(r.paths.iter().any(|p| p.name == r.critical_path));
    }
}

/// Tests that ties are resolved the same way on every run.
#[test]
fn test_tie_break_determinism() {
    let lib = DelayLibrary::new([("a", 1.0), ("b", 2.0), ("c", 3.0)]).unwrap();
    let mut builder = TimingModel::builder(lib);
    let v = builder.add_variant("v").unwrap();
    builder.add_path(v, "short", [("a", "a")]).unwrap();
    builder.add_path(v, "first", [("a", "a"), ("b", "b")]).unwrap();
    builder.add_path(v, "second", [("c", "c")]).unwrap();
    let model = builder.build().unwrap();

    for _ in 0..16 {
        let r = analyze(&model, "v").unwrap();
        assert_eq!(r.critical_path, "first");
        assert_eq!(r.period_ns, 3.0);
    }
}

/// Tests f_max * period == 1000 for every variant.
#[test]
fn test_frequency_period_relation() {
    for r in analyze_all(&riscv()).unwrap() {
        assert!((r.frequency_mhz * r.period_ns - 1000.0).abs() < 1e-9);
    }
}

/// Tests that lengthening the critical path raises the period and lowers f_max.
#[test]
fn test_monotonicity() {
    let model = riscv();
    let before = analyze(&model, "single-cycle").unwrap();

    let slower = model.with_delay("alu_add", 1.6).unwrap();
    let after = analyze(&slower, "single-cycle").unwrap();

    assert_eq!(after.critical_path, before.critical_path);
    assert!(after.period_ns > before.period_ns);
    assert!(after.frequency_mhz < before.frequency_mhz);
    assert!(close(after.period_ns - before.period_ns, 0.1));

    let unchanged = analyze(&model, "single-cycle").unwrap();
    assert_eq!(unchanged, before);
}

/// Tests that a what-if edit can move the critical path.
#[test]
fn test_with_delay_moves_critical_path() {
    let model = riscv().with_delay("mux_4to1", 2.0).unwrap();
    let r = analyze(&model, "multi-cycle").unwrap();
    assert_eq!(r.critical_path, "EXECUTE (ALU)");
    assert!(close(r.period_ns, 0.4 + 2.0 + 1.5 + 0.2 + 0.3));
}

/// Tests that an all-zero critical path is reported as degenerate.
#[test]
fn test_degenerate_timing() {
    let lib = DelayLibrary::new([("wire", 0.0)]).unwrap();
    let mut builder = TimingModel::builder(lib);
    let v = builder.add_variant("ideal").unwrap();
    builder.add_path(v, "p", [("w", "wire"), ("w", "wire")]).unwrap();
    let model = builder.build().unwrap();

    assert!(matches!(
        analyze(&model, "ideal"),
        Err(TimingError::DegenerateTiming { .. })
    ));
}

/// Tests analysis of an unregistered variant.
#[test]
fn test_unknown_variant() {
    assert!(matches!(
        analyze(&riscv(), "superscalar"),
        Err(TimingError::UnknownVariant { .. })
    ));
}

/// Tests that analyze_all follows registration order.
#[test]
fn test_analyze_all_order() {
    let names: Vec<String> = analyze_all(&riscv())
        .unwrap()
        .into_iter()
        .map(|r| r.variant)
        .collect();
    assert_eq!(names, ["single-cycle", "multi-cycle", "pipelined"]);
}

/// Tests concurrent analysis of different variants over one shared model.
#[test]
fn test_concurrent_analysis() {
    let model = riscv();
    let expected = analyze_all(&model).unwrap();
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = ["single-cycle", "multi-cycle", "pipelined"]
            .into_iter()
            .map(|name| {
                let model = &model;
                s.spawn(move || analyze(model, name).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}
