use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=MJ_USE_GC");
    println!("cargo:rustc-check-cfg=cfg(mj_gc)");

    let from_feature = env::var_os("CARGO_FEATURE_GC").is_some();
    let from_env = env::var("MJ_USE_GC").is_ok_and(|v| v.trim() == "1");
    if from_feature || from_env {
        println!("cargo:rustc-cfg=mj_gc");
        println!("cargo:rustc-link-lib=gc");
    }
}
