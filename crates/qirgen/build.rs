fn main() {
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rustc-env=BUILD_DATE={}", date);
}
