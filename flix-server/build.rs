use static_files::resource_dir;

fn main() -> std::io::Result<()> {
    built::write_built_file()?;

    // The site bundle is optional, the server still builds without it.
    std::fs::create_dir_all("../flix-site/dist")?;
    println!("cargo::rerun-if-changed=../flix-site/dist");
    resource_dir("../flix-site/dist").build()
}
