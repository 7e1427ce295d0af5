//! Configuration loading and validation tests.

use riscv_timing::analysis::analyze;
use riscv_timing::common::TimingError;
use riscv_timing::config::*;
use std::collections::BTreeMap;

const SMALL: &str = r#"
[workload]
instructions = 100

[delays]
memory_read = 2.5
alu_add = 1.5
reg_setup = 0.3

[[variants]]
name = "single-cycle"
baseline = true

[[variants.paths]]
name = "Load"
elements = [
    { label = "Instruction Memory", component = "memory_read" },
    { label = "ALU", component = "alu_add" },
    { label = "Data Memory", component = "memory_read" },
]

[[variants]]
name = "multi-cycle"
cpi = 4.0

[[variants.paths]]
name = "MEM"
elements = [
    { label = "Memory", component = "memory_read" },
    { label = "Setup", component = "reg_setup" },
]
"#;

/// Creates a minimal configuration in code.
fn create_minimal_config() -> Config {
    Config {
        workload: WorkloadConfig::default(),
        delays: BTreeMap::from([("alu_add".to_string(), 1.5)]),
        variants: vec![VariantConfig {
            name: "single-cycle".to_string(),
            cpi: 1.0,
            baseline: false,
            paths: vec![PathConfig {
                name: "ALU".to_string(),
                elements: vec![ElementConfig {
                    label: "Add".to_string(),
                    component: "alu_add".to_string(),
                }],
            }],
        }],
    }
}

/// Tests parsing, defaults and model construction.
#[test]
fn test_parse_small_config() {
    let config = Config::parse(SMALL).unwrap();
    assert_eq!(config.workload.instructions, 100);
    assert_eq!(config.variants[0].cpi, 1.0);
    assert_eq!(config.variants[1].cpi, 4.0);
    assert!(!config.variants[1].baseline);
    assert_eq!(config.baseline().unwrap(), "single-cycle");

    let model = config.build_model().unwrap();
    let r = analyze(&model, "single-cycle").unwrap();
    assert!((r.period_ns - 6.5).abs() < 1e-9);

    let specs = config.variant_specs(config.workload.instructions);
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[1].variant, "multi-cycle");
    assert_eq!(specs[1].cpi, 4.0);
    assert_eq!(specs[1].instructions, 100);
}

/// Tests the built-in RISC-V model contents.
#[test]
fn test_builtin_config() {
    let config = Config::builtin().unwrap();
    assert_eq!(config.workload.instructions, 10);
    assert_eq!(config.delays.len(), 19);
    assert_eq!(config.delays["memory_read"], 2.5);
    assert_eq!(config.delays["reg_clk_to_q"], 0.4);
    assert_eq!(config.baseline().unwrap(), "single-cycle");

    let cpis: Vec<f64> = config.variants.iter().map(|v| v.cpi).collect();
    assert_eq!(cpis, [1.0, 4.25, 3.0]);

    let model = config.build_model().unwrap();
    assert_eq!(model.variants().len(), 3);
    assert_eq!(model.variants()[0].paths.len(), 3);
    assert_eq!(model.variants()[1].paths.len(), 5);
    assert_eq!(model.variants()[2].paths.len(), 5);
}

/// Tests that a bad component reference fails when the model is built.
#[test]
fn test_unknown_component_fails_at_load() {
    let text = SMALL.replace("component = \"alu_add\"", "component = \"nonexistent\"");
    let config = Config::parse(&text).unwrap();
    match config.build_model() {
        Err(TimingError::UnknownComponent { id }) => assert_eq!(id, "nonexistent"),
        other => panic!("expected UnknownComponent, got {:?}", other.map(|_| ())),
    }
}

/// Tests that an empty element list fails when the model is built.
#[test]
fn test_empty_path_fails_at_load() {
    let mut config = create_minimal_config();
    config.variants[0].paths[0].elements.clear();
    assert!(matches!(
        config.build_model(),
        Err(TimingError::EmptyPath { .. })
    ));
}

/// Tests baseline resolution rules.
#[test]
fn test_baseline_resolution() {
    let mut config = create_minimal_config();
    assert!(matches!(
        config.baseline(),
        Err(TimingError::InvalidBaseline { .. })
    ));

    config.variants[0].baseline = true;
    assert_eq!(config.baseline().unwrap(), "single-cycle");

    config.workload.baseline = Some("pipelined".to_string());
    assert_eq!(config.baseline().unwrap(), "pipelined");

    let mut second = config.variants[0].clone();
    second.name = "pipelined".to_string();
    config.variants.push(second);
    assert!(matches!(
        config.build_model(),
        Err(TimingError::MultipleBaselines { .. })
    ));
}

/// Tests a negative delay in the table.
#[test]
fn test_negative_delay() {
    let mut config = create_minimal_config();
    config.delays.insert("alu_add".to_string(), -1.5);
    assert!(matches!(
        config.build_model(),
        Err(TimingError::InvalidDelay { .. })
    ));
}

/// Tests malformed TOML and missing files.
#[test]
fn test_parse_and_io_errors() {
    assert!(matches!(
        Config::parse("[delays]\nmemory_read = \"fast\"\n"),
        Err(TimingError::Parse(_))
    ));
    assert!(matches!(
        Config::from_file("/nonexistent/timing.toml"),
        Err(TimingError::Io { .. })
    ));
}

/// Tests loading a configuration from disk.
#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("riscv_timing_{}.toml", std::process::id()));
    std::fs::write(&path, SMALL).unwrap();
    let config = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.variants.len(), 2);
}
