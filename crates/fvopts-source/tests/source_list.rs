//! Applying and reloading a list of sources.

use fvopts_core::{ConfigError, Dictionary, SolverTime, SourceError, Vector, VectorEquation, VolScalarField};
use fvopts_function::FunctionLibrary;
use fvopts_source::{FvSource, SourceContext, SourceList, SourceRegistry};
use fvopts_test_utils::{fixtures, RecordingEquation};

fn case_dict() -> Dictionary {
    Dictionary::new("fvOptions")
        .with(
            "inletPush",
            fixtures::zone_acceleration_dict("inletPush", "inlet", Vector::new(1.0, 0.0, 0.0))
                .with("timeStart", 0.0)
                .with("duration", 1.0),
        )
        .with(
            "outletDrag",
            fixtures::zone_acceleration_dict("outletDrag", "outlet", Vector::new(-1.0, 0.0, 0.0)),
        )
        .with(
            "airOnly",
            fixtures::zone_acceleration_dict("airOnly", "inlet", Vector::new(0.0, 5.0, 0.0))
                .with("U", "U.air"),
        )
        .with("version", 2.0)
}

#[test]
fn builds_one_source_per_block() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let list = SourceList::new(&case_dict(), &registry, ctx).unwrap();

    assert_eq!(list.len(), 3);
    let names: Vec<_> = list.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["inletPush", "outletDrag", "airOnly"]);
    assert!(list.applies_to_field("U.air"));
    assert!(!list.applies_to_field("p"));
    assert_eq!(list.get("airOnly").map(|s| s.type_name()), Some("accelerationSource"));
}

#[test]
fn bad_block_fails_construction() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let dict = case_dict().with("broken", Dictionary::new("broken").with("type", "accelerationSource"));
    let err = SourceList::new(&dict, &registry, ctx).map(|l| l.len()).unwrap_err();
    assert_eq!(err.instance(), "broken");
}

#[test]
fn window_and_field_gate_application() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let mut list = SourceList::new(&case_dict(), &registry, ctx).unwrap();

    let mut early = RecordingEquation::new("U", 6);
    list.add_sup(&SolverTime::at(0.5), &mut early).unwrap();
    assert_eq!(early.source(0), Vector::new(1.0, 0.0, 0.0));
    assert_eq!(early.source(1), Vector::new(2.0, 0.0, 0.0));
    assert_eq!(early.source(4), Vector::new(-5.0, 0.0, 0.0));

    let mut late = RecordingEquation::new("U", 6);
    list.add_sup(&SolverTime::at(2.0), &mut late).unwrap();
    assert_eq!(late.source(0), Vector::ZERO);
    assert_eq!(late.source(5), Vector::new(-6.0, 0.0, 0.0));

    assert_eq!(list.check_applied(), vec!["airOnly"]);

    let rho = VolScalarField::uniform("rho.air", 6, 1.2);
    let mut air = RecordingEquation::new("U.air", 6);
    list.add_rho_sup(&SolverTime::at(2.0), &rho, &mut air).unwrap();
    assert!((air.source(1) - Vector::new(0.0, 12.0, 0.0)).mag() < 1e-12);
    assert!(list.check_applied().is_empty());
}

#[test]
fn multiphase_dispatch() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let mut list = SourceList::new(&case_dict(), &registry, ctx).unwrap();

    let rho = VolScalarField::uniform("rho", 6, 2.0);
    let alpha = VolScalarField::uniform("alpha", 6, 0.5);
    let mut eqn = RecordingEquation::new("U", 6);
    list.add_alpha_rho_sup(&SolverTime::at(0.0), &alpha, &rho, &mut eqn).unwrap();
    assert_eq!(eqn.source(0), Vector::new(1.0, 0.0, 0.0));
    assert_eq!(eqn.source(5), Vector::new(-6.0, 0.0, 0.0));
}

#[test]
fn first_failure_is_returned() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let mut list = SourceList::new(&case_dict(), &registry, ctx).unwrap();

    let mut small = RecordingEquation::new("U", 3);
    let err = list.add_sup(&SolverTime::at(0.5), &mut small).unwrap_err();
    assert!(matches!(err, SourceError::CellOutOfRange { ref source, .. } if source == "outletDrag"));
}

#[test]
fn reload_reports_failures_and_keeps_the_rest() {
    let catalog = fixtures::graded_catalog();
    let functions = FunctionLibrary::builtin().unwrap();
    let registry = SourceRegistry::builtin().unwrap();
    let ctx = SourceContext::new(&catalog, &functions);
    let mut list = SourceList::new(&case_dict(), &registry, ctx).unwrap();

    let next = Dictionary::new("fvOptions")
        .with(
            "inletPush",
            fixtures::zone_acceleration_dict("inletPush", "inlet", Vector::new(3.0, 0.0, 0.0)),
        )
        .with(
            "outletDrag",
            fixtures::zone_acceleration_dict("outletDrag", "missingZone", Vector::new(-9.0, 0.0, 0.0)),
        );
    let report = list.read(&next);
    assert_eq!(report.reloaded, 1);
    assert!(!report.is_ok());
    let failed: Vec<_> = report.failed.iter().map(|e| e.instance()).collect();
    assert_eq!(failed, vec!["outletDrag", "airOnly"]);

    let mut eqn = RecordingEquation::new("U", 6);
    list.add_sup(&SolverTime::at(5.0), &mut eqn).unwrap();
    assert_eq!(eqn.source(0), Vector::new(3.0, 0.0, 0.0));
    assert_eq!(eqn.source(4), Vector::new(-5.0, 0.0, 0.0));
}

/// Implements only the incompressible form.
struct IncompressibleOnly {
    fields: Vec<String>,
}

impl FvSource for IncompressibleOnly {
    fn name(&self) -> &str {
        "incompressibleOnly"
    }

    fn type_name(&self) -> &'static str {
        "incompressibleOnly"
    }

    fn field_names(&self) -> &[String] {
        &self.fields
    }

    fn add_sup(
        &self,
        _time: &SolverTime,
        eqn: &mut dyn VectorEquation,
        _fieldi: usize,
    ) -> Result<(), SourceError> {
        eqn.add_source(0, Vector::new(1.0, 0.0, 0.0));
        Ok(())
    }

    fn read(&mut self, _dict: &Dictionary) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[test]
fn unimplemented_forms_are_skipped_and_not_marked_applied() {
    let only: Box<dyn FvSource> = Box::new(IncompressibleOnly {
        fields: vec!["U".to_string()],
    });
    let mut list = SourceList::from_sources(vec![only]);
    let rho = VolScalarField::uniform("rho", 2, 1.0);
    let time = SolverTime::at(0.0);

    let mut eqn = RecordingEquation::new("U", 2);
    list.add_rho_sup(&time, &rho, &mut eqn).unwrap();
    list.add_alpha_rho_sup(&time, &rho, &rho, &mut eqn).unwrap();
    assert!(eqn.is_untouched());
    assert_eq!(list.check_applied(), vec!["incompressibleOnly"]);

    list.add_sup(&time, &mut eqn).unwrap();
    assert_eq!(eqn.source(0), Vector::new(1.0, 0.0, 0.0));
    assert!(list.check_applied().is_empty());
}
