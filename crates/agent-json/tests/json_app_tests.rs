use std::path::{Path, PathBuf};

use agent_core::errors::CoreError;
use agent_core::model::{FileMap, MetadataMap, OutputMetadata, RoleMapExt, RoleValue};
use agent_core::{Agent, AgentContext, AgentKind, App, Intermediate, Metadata, RunOutput, StagingPolicy};
use agent_json::{read_results, JsonApp, JsonAppError};
use serde_json::{json, Value};

/// Copia cada entrada de "number" a su salida, derivando la metadata.
struct CopyAgent;

impl Agent for CopyAgent {
    fn from_context(_: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self)
    }

    fn name(&self) -> &str {
        "copy"
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        let inputs = input_files.role("number")?;
        let metas = input_metadata.role("number")?;
        let target = output_files.single("output")?;
        let mut paths = Vec::new();
        let mut mds = Vec::new();
        for (i, (src, md)) in inputs.iter().zip(metas.iter()).enumerate() {
            let dst = format!("{target}.{i}");
            if std::fs::copy(src, &dst).is_err() {
                return Ok(RunOutput::empty());
            }
            mds.push(md.child(dst.clone()));
            paths.push(dst);
        }
        let mut files = FileMap::new();
        files.insert("output".into(), RoleValue::many(paths));
        let mut md = MetadataMap::new();
        md.insert("output".into(), RoleValue::many(mds));
        Ok(RunOutput::new(files, md))
    }
}

/// Devuelve la semilla de metadata tal cual.
struct SeedEchoAgent;

impl Agent for SeedEchoAgent {
    fn from_context(_: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self)
    }

    fn name(&self) -> &str {
        "seed_echo"
    }

    fn run(&self, _: &FileMap, _: &MetadataMap, output_files: &FileMap) -> Result<RunOutput, CoreError> {
        Ok(RunOutput::with_metadata(output_files.clone(), OutputMetadata::Unsupported(json!(42))))
    }

    fn run_seeded(&self,
                  input_files: &FileMap,
                  input_metadata: &MetadataMap,
                  output_files: &FileMap,
                  seed: Option<&OutputMetadata>)
                  -> Result<RunOutput, CoreError> {
        match seed {
            Some(seed) => Ok(RunOutput::with_metadata(output_files.clone(), seed.clone())),
            None => self.run(input_files, input_metadata, output_files),
        }
    }
}

/// Workflow sembrado: copia cada "number" a `<ruta>.out` como intermedio y
/// devuelve la semilla como metadata final.
struct SeededStagesWorkflow;

impl Agent for SeededStagesWorkflow {
    fn from_context(_: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self)
    }

    fn name(&self) -> &str {
        "seeded_stages"
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Workflow
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        self.run_seeded(input_files, input_metadata, output_files, None)
    }

    fn run_seeded(&self,
                  input_files: &FileMap,
                  input_metadata: &MetadataMap,
                  output_files: &FileMap,
                  seed: Option<&OutputMetadata>)
                  -> Result<RunOutput, CoreError> {
        let Some(seed) = seed else { return Ok(RunOutput::empty()) };
        let mut intermediates = Vec::new();
        for (src, md) in input_files.role("number")?.iter().zip(input_metadata.role("number")?.iter()) {
            let dst = format!("{src}.out");
            if std::fs::copy(src, &dst).is_err() {
                return Ok(RunOutput::empty());
            }
            intermediates.push(Intermediate { role: "output".into(),
                                              metadata: md.child(dst.clone()),
                                              file_path: dst });
        }
        Ok(RunOutput::with_metadata(output_files.clone(), seed.clone()).with_intermediates(intermediates))
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn path_str(&self, name: &str) -> String {
        self.path(name).to_string_lossy().into_owned()
    }

    fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let p = self.path(name);
        std::fs::write(&p, serde_json::to_string_pretty(value).unwrap()).unwrap();
        p
    }

    fn inputs(&self) -> PathBuf {
        for (name, n) in [("a", "5"), ("b", "9")] {
            std::fs::write(self.path(name), n).unwrap();
        }
        self.write_json("input_metadata.json",
                        &json!([
                            {"_id": "id_a", "data_type": "Number", "file_type": "TXT",
                             "file_path": self.path_str("a"), "meta_data": {"visible": true}, "sources": []},
                            {"_id": "id_b", "data_type": "Number", "file_type": "TXT",
                             "file_path": self.path_str("b"), "meta_data": {}, "sources": []},
                            {"_id": "id_extra", "data_type": "Log", "file_type": "TXT",
                             "file_path": self.path_str("extra"), "meta_data": {}, "sources": []}
                        ]))
    }
}

fn config(fx: &Fixture, outputs: Value) -> Value {
    json!({
        "input_files": [
            {"name": "number", "value": "id_a", "required": true, "allow_multiple": true},
            {"name": "number", "value": "id_b", "required": true, "allow_multiple": true}
        ],
        "output_files": outputs,
        "arguments": [{"name": "execution", "value": fx.root.to_string_lossy()}]
    })
}

fn launch<A: Agent>(fx: &Fixture, cfg: &Value) -> (Result<bool, JsonAppError>, PathBuf) {
    let cfg_path = fx.write_json("config.json", cfg);
    let md_path = fx.inputs();
    let results = fx.path("results.json");
    (JsonApp::new().launch::<A>(&cfg_path, &md_path, &results), results)
}

#[test]
fn multiple_inputs_round_trip_through_results_file() {
    let fx = Fixture::new();
    let cfg = config(&fx, json!([{"name": "output", "file": {"file_path": fx.path_str("copy")}}]));
    let (ok, results) = launch::<CopyAgent>(&fx, &cfg);
    assert!(ok.unwrap());

    let parsed = read_results(&results).unwrap();
    assert_eq!(parsed.output_files.len(), 2);
    let first = &parsed.output_files[0];
    assert_eq!(first.name, "output");
    assert_eq!(first.kind, "file");
    assert_eq!(first.file_path, format!("{}.0", fx.path_str("copy")));
    assert_eq!(first.sources, Some(vec![fx.path_str("a")]));
    assert_eq!(first.meta_data["visible"], json!(true));
    assert_eq!(std::fs::read_to_string(&first.file_path).unwrap(), "5");

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&results).unwrap()).unwrap();
    assert!(raw["output_files"][0].get("compressed").is_none());
    // indentación de 2 espacios
    assert!(std::fs::read_to_string(&results).unwrap().starts_with("{\n  \"output_files\""));
}

#[test]
fn seeded_descriptors_collect_all_input_sources() {
    let fx = Fixture::new();
    let cfg = config(&fx,
                     json!([
                         {"name": "output", "file": {"file_path": fx.path_str("out"), "data_type": "Number",
                                                     "file_type": "TXT", "meta_data": {"tool": "seed"}}},
                         {"name": "prov", "file": {"file_path": fx.path_str("prov"), "data_type": "provenance_data",
                                                   "file_type": "JSON"}}
                     ]));
    let (ok, results) = launch::<SeedEchoAgent>(&fx, &cfg);
    assert!(ok.unwrap());

    let parsed = read_results(&results).unwrap();
    assert_eq!(parsed.output_files.len(), 2);
    assert_eq!(parsed.output_files[0].sources,
               Some(vec![fx.path_str("a"), fx.path_str("b"), fx.path_str("extra")]));
    assert_eq!(parsed.output_files[1].sources, Some(vec![]));
}

#[test]
fn unsupported_metadata_shape_returns_false() {
    let fx = Fixture::new();
    let results = fx.path("results.json");

    // sin semilla el agente devuelve una forma no reconocible
    let output = agent_core::App::new().launch::<SeedEchoAgent>(FileMap::new(),
                                                                MetadataMap::new(),
                                                                &FileMap::new(),
                                                                Default::default(),
                                                                None)
                                       .unwrap();
    let ok = agent_json::write_results(&Default::default(), &output.files, &output.metadata, &results).unwrap();
    assert!(!ok);
    assert!(!Path::new(&results).exists());
}

#[test]
fn unknown_input_id_fails_before_running() {
    let fx = Fixture::new();
    let cfg = json!({
        "input_files": [{"name": "number", "value": "missing", "allow_multiple": false}],
        "output_files": [],
        "arguments": []
    });
    let (res, results) = launch::<CopyAgent>(&fx, &cfg);
    assert!(matches!(res, Err(JsonAppError::UnknownInputId(id)) if id == "missing"));
    assert!(!results.exists());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let fx = Fixture::new();
    let md = fx.inputs();
    let res = JsonApp::new().launch::<CopyAgent>(&fx.path("nope.json"), &md, &fx.path("results.json"));
    assert!(matches!(res, Err(JsonAppError::Io { .. })));
}

#[test]
fn metadata_type_defaults_to_file() {
    let md: Metadata = serde_json::from_value(json!({"data_type": "Number", "file_type": "TXT"})).unwrap();
    assert_eq!(md.kind, "file");
}

#[test]
fn exposed_intermediates_pair_one_record_per_path() {
    let fx = Fixture::new();
    let cfg = config(&fx,
                     json!([{"name": "output", "file": {"file_path": fx.path_str("out"), "data_type": "Number",
                                                        "file_type": "TXT"}}]));
    let cfg_path = fx.write_json("config.json", &cfg);
    let md_path = fx.inputs();
    let results = fx.path("results.json");

    let app = JsonApp::with_app(App::workflow_app(StagingPolicy::Expose));
    assert!(app.launch::<SeededStagesWorkflow>(&cfg_path, &md_path, &results).unwrap());

    let parsed = read_results(&results).unwrap();
    let inter: Vec<_> = parsed.output_files.iter().filter(|r| r.name == "intermediate:output").collect();
    assert_eq!(inter.len(), 2);
    assert_eq!(inter[0].file_path, format!("{}.out", fx.path_str("a")));
    assert_eq!(inter[0].sources, Some(vec![fx.path_str("a")]));
    assert_eq!(inter[1].file_path, format!("{}.out", fx.path_str("b")));
    assert_eq!(inter[1].sources, Some(vec![fx.path_str("b")]));
    assert_eq!(parsed.output_files.iter().filter(|r| r.name == "output").count(), 1);
}

#[test]
fn input_without_file_path_is_rejected() {
    let fx = Fixture::new();
    let cfg_path = fx.write_json("config.json",
                                 &json!({
                                     "input_files": [{"name": "number", "value": "nopath", "allow_multiple": false}],
                                     "output_files": [],
                                     "arguments": []
                                 }));
    let md_path = fx.write_json("input_metadata.json",
                                &json!([{"_id": "nopath", "data_type": "Number", "file_type": "TXT",
                                         "meta_data": {}, "sources": []}]));
    let results = fx.path("results.json");
    let res = JsonApp::new().launch::<CopyAgent>(&cfg_path, &md_path, &results);
    assert!(matches!(res, Err(JsonAppError::MissingInputPath(id)) if id == "nopath"));
    assert!(!results.exists());
}
