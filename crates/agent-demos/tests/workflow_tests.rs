use std::fs;
use std::path::Path;
use std::sync::Arc;

use agent_core::model::{FileMap, MetadataMap, RoleValue};
use agent_core::{App, Configuration, Metadata, RecordingProgress, StagingPolicy};
use agent_demos::scenarios;
use agent_demos::tasks::read_number;
use agent_demos::CumulativeWorkflow;

fn recording_app(policy: Option<StagingPolicy>) -> (App, Arc<RecordingProgress>) {
    let rec = Arc::new(RecordingProgress::new());
    let builder = App::builder().progress(rec.clone());
    let builder = match policy {
        Some(p) => builder.post_hook(agent_core::IntermediateStaging::new(p)),
        None => builder,
    };
    (builder.build(), rec)
}

#[test]
fn increment_and_sum_produces_sixteen() {
    let dir = tempfile::tempdir().unwrap();
    let (app, rec) = recording_app(Some(StagingPolicy::Discard));
    let out = scenarios::increment_and_sum(&app, dir.path()).unwrap();

    let path = out.files["output"].as_single().unwrap().clone();
    assert_eq!(read_number(&path).unwrap(), 16);
    assert_eq!(rec.percents(), vec![50.0, 75.0, 100.0]);
    assert!(out.intermediates.is_empty());
    assert_eq!(out.files.len(), 1);

    // la metadata final deriva del primer intermedio
    let md = out.metadata_by_role().unwrap()["output"].as_single().unwrap();
    let file1 = dir.path().join("file1.out").to_string_lossy().into_owned();
    assert_eq!(md.sources, Some(vec![file1]));
}

#[test]
fn exposed_intermediates_are_published() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = recording_app(Some(StagingPolicy::Expose));
    let out = scenarios::increment_and_sum(&app, dir.path()).unwrap();

    let inter = &out.files["intermediate:output"];
    assert_eq!(inter.len(), 2);
    let values: Vec<i64> = inter.iter().map(|p| read_number(p).unwrap()).collect();
    assert_eq!(values, vec![6, 10]);
}

#[test]
fn cumulative_reduces_incremented_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let (app, rec) = recording_app(None);
    let out = scenarios::cumulative(&app, dir.path()).unwrap();

    let files = out.files["output"].as_many().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(read_number(&files[0]).unwrap(), 16);
    assert_eq!(read_number(&files[1]).unwrap(), 30);
    assert!(files[0].ends_with("outputFile0"));

    let mds = out.metadata_by_role().unwrap()["output"].as_many().unwrap();
    let f = |n: &str| dir.path().join(n).to_string_lossy().into_owned();
    assert_eq!(mds[0].sources, Some(vec![f("file1.out"), f("file2.out")]));
    assert_eq!(mds[1].sources, Some(vec![files[0].clone(), f("file3.out")]));

    let percents = rec.percents();
    assert_eq!(percents.first(), Some(&0.0));
    assert_eq!(percents.last(), Some(&100.0));
    assert_eq!(percents.len(), 4);
}

#[test]
fn parity_violation_aborts_before_any_agent_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for (i, n) in [5, 9, 13].iter().enumerate() {
        let p = dir.path().join(format!("n{i}"));
        fs::write(&p, n.to_string()).unwrap();
        paths.push(p.to_string_lossy().into_owned());
    }
    let mut files = FileMap::new();
    files.insert("number".into(), RoleValue::many(paths.clone()));
    let mut metadata = MetadataMap::new();
    metadata.insert("number".into(),
                    RoleValue::many(vec![Metadata::new("Number", "plainText"), Metadata::new("Number", "plainText")]));
    let mut outputs = FileMap::new();
    outputs.insert("output".into(),
                   RoleValue::single(dir.path().join("out{}").to_string_lossy().into_owned()));

    let out = App::new().launch::<CumulativeWorkflow>(files, metadata, &outputs, Configuration::new(), None)
                        .unwrap();
    assert!(out.is_empty());
    for p in &paths {
        assert!(!Path::new(&format!("{p}.out")).exists());
    }
}

#[test]
fn workflow_app_surfaces_parity_violation_as_error() {
    let mut files = FileMap::new();
    files.insert("number".into(), RoleValue::many(vec!["a".to_string(), "b".to_string()]));
    let mut metadata = MetadataMap::new();
    metadata.insert("number".into(), RoleValue::many(vec![Metadata::default()]));
    let res = App::workflow_app(StagingPolicy::Discard).launch::<CumulativeWorkflow>(files,
                                                                                     metadata,
                                                                                     &FileMap::new(),
                                                                                     Configuration::new(),
                                                                                     None);
    assert!(res.is_err());
}

#[test]
fn unreadable_input_is_skipped_by_the_cumulative_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let good: Vec<String> = [("a", "1"), ("b", "2")].iter()
                                                  .map(|(n, v)| {
                                                      let p = dir.path().join(n);
                                                      fs::write(&p, v).unwrap();
                                                      p.to_string_lossy().into_owned()
                                                  })
                                                  .collect();
    let missing = dir.path().join("missing").to_string_lossy().into_owned();
    let paths = vec![good[0].clone(), missing, good[1].clone()];

    let mut files = FileMap::new();
    files.insert("number".into(), RoleValue::many(paths.clone()));
    let mut metadata = MetadataMap::new();
    metadata.insert("number".into(),
                    RoleValue::many(paths.iter().map(|p| Metadata::new("Number", "TXT").with_path(p.clone())).collect()));
    let mut outputs = FileMap::new();
    outputs.insert("output".into(),
                   RoleValue::single(dir.path().join("sum{}").to_string_lossy().into_owned()));

    let out = App::new().launch::<CumulativeWorkflow>(files, metadata, &outputs, Configuration::new(), None)
                        .unwrap();
    let sums = out.files["output"].as_many().unwrap();
    assert_eq!(sums.len(), 1);
    assert_eq!(read_number(&sums[0]).unwrap(), 5);
}
