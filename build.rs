fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the session daemon proto shipped with this crate
    let proto_file = "proto/auth.proto";

    // Tell cargo to recompile if the proto file changes
    println!("cargo:rerun-if-changed={}", proto_file);

    // Use the vendored `protoc` when the host has no system install, so the
    // proto compilation step is self-contained.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", path);
        }
    }

    tonic_build::configure()
        .build_server(false) // We only need the client
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
