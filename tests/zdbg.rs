#[test]
fn zdbg_repro() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    match umber::new::create_new_project(std::path::Path::new(".")) {
        Ok(()) => println!("OK created"),
        Err(e) => println!("ERR: {:#}", e),
    }
}
