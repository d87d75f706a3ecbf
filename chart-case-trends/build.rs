use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("dataset.csv");

    // The dataset path is build configuration; the app embeds whatever it points at.
    let src = env::var("CASES_DATASET")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("../fixtures/dataset-india.csv"));

    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        // Header only: the app reports an empty dataset instead of failing the build.
        println!("cargo:warning=dataset {} not found, embedding an empty one", src.display());
        fs::write(&dest, "Date,State,Negative,Positive\n").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CASES_DATASET");
    println!("cargo:rerun-if-changed={}", src.display());
}
