#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use jobcard::core::draft::Draft;
use jobcard::core::form::JobForm;
use jobcard::models::catalog::Catalog;
use jobcard::models::job_record::JobRecord;
use jobcard::models::job_type::JobType;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an isolated directory so the
/// real configuration and journal are never touched.
pub fn jc(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("jobcard");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobcard_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Sheet path inside the system temp dir, removed if it already exists.
pub fn temp_sheet(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobcard_sheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobcard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `init` in test mode against `sheet`.
pub fn init_sheet(home: &str, sheet: &str) {
    jc(home)
        .args(["--sheet", sheet, "--test", "init"])
        .assert()
        .success();
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn form(desc: &str, site: &str) -> JobForm {
    JobForm {
        job_type: JobType::Job,
        date: day(2025, 9, 1),
        start_time: None,
        end_time: None,
        site: site.to_string(),
        work_description: desc.to_string(),
    }
}

/// Draft with one Sealant line and Denver, the reference card.
pub fn sealant_draft(catalog: &Catalog) -> Draft {
    let mut draft = Draft::new();
    draft
        .add_material(catalog, "Sealant", 2.0, Some("Units"))
        .expect("add sealant");
    draft.add_technician(catalog, "Denver").expect("add denver");
    draft
}

pub fn record(site: &str, desc: &str) -> JobRecord {
    JobRecord {
        job_type: JobType::Job,
        date: day(2025, 8, 15),
        start_time: Some(hm(8, 0)),
        end_time: Some(hm(12, 30)),
        site: site.to_string(),
        work_description: desc.to_string(),
        materials_summary: "None Used".to_string(),
        technicians_summary: "Jane Doe".to_string(),
    }
}
