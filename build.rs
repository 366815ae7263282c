fn main() {
    println!("cargo:rerun-if-env-changed=PUNAH_VERSION");
    println!("cargo:rerun-if-changed=lang");
}
