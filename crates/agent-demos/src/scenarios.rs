//! Escenarios de demostración: crean los archivos de entrada en un directorio
//! de trabajo y lanzan el workflow correspondiente en memoria.
use std::fs;
use std::path::Path;

use agent_core::errors::CoreError;
use agent_core::model::{FileMap, MetadataMap, RoleValue};
use agent_core::{App, Configuration, Metadata, RunOutput};
use log::info;

use crate::tasks::write_number;
use crate::workflows::{CumulativeWorkflow, IncrementAndSumWorkflow};

fn create_number(workdir: &Path, name: &str, value: i64) -> Result<(String, Metadata), CoreError> {
    let path = workdir.join(name);
    write_number(&path, value).map_err(|e| CoreError::Internal(format!("cannot write {}: {e}", path.display())))?;
    let path = path.to_string_lossy().into_owned();
    let md = Metadata::new("Number", "plainText").with_path(path.clone());
    Ok((path, md))
}

fn prepare_workdir(workdir: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(workdir).map_err(|e| CoreError::Internal(format!("cannot create {}: {e}", workdir.display())))
}

/// `number1 = 5`, `number2 = 9`; el resultado esperado es `(5+1)+(9+1) = 16`.
pub fn increment_and_sum(app: &App, workdir: &Path) -> Result<RunOutput, CoreError> {
    info!("1. Create some data: 2 input files");
    prepare_workdir(workdir)?;
    let (f1, m1) = create_number(workdir, "file1", 5)?;
    let (f2, m2) = create_number(workdir, "file2", 9)?;

    let mut files = FileMap::new();
    files.insert("number1".into(), RoleValue::single(f1));
    files.insert("number2".into(), RoleValue::single(f2));
    let mut metadata = MetadataMap::new();
    metadata.insert("number1".into(), RoleValue::single(m1));
    metadata.insert("number2".into(), RoleValue::single(m2));
    let mut outputs = FileMap::new();
    outputs.insert("output".into(),
                   RoleValue::single(workdir.join("outputFile").to_string_lossy().into_owned()));

    info!("2. Instantiate and launch the App");
    app.launch::<IncrementAndSumWorkflow>(files, metadata, &outputs, Configuration::new(), None)
}

/// `number = [5, 9, 13]`; las salidas esperadas son `16` y `30`.
pub fn cumulative(app: &App, workdir: &Path) -> Result<RunOutput, CoreError> {
    info!("1. Create some data: 3 input files");
    prepare_workdir(workdir)?;
    let mut paths = Vec::new();
    let mut mds = Vec::new();
    for (i, n) in [5, 9, 13].into_iter().enumerate() {
        let (p, m) = create_number(workdir, &format!("file{}", i + 1), n)?;
        paths.push(p);
        mds.push(m);
    }

    let mut files = FileMap::new();
    files.insert("number".into(), RoleValue::many(paths));
    let mut metadata = MetadataMap::new();
    metadata.insert("number".into(), RoleValue::many(mds));
    let mut outputs = FileMap::new();
    outputs.insert("output".into(),
                   RoleValue::single(workdir.join("outputFile{}").to_string_lossy().into_owned()));

    info!("2. Instantiate and launch the App");
    app.launch::<CumulativeWorkflow>(files, metadata, &outputs, Configuration::new(), None)
}
