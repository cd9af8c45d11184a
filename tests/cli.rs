use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with an isolated config directory.
fn paintbox_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paintbox").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn is_png(path: &std::path::Path) -> bool {
    std::fs::read(path)
        .map(|bytes| bytes.starts_with(b"\x89PNG\r\n\x1a\n"))
        .unwrap_or(false)
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrap, justify and render text with Cairo and Pango",
        ));
}

#[test]
fn wrap_breaks_every_char_when_width_is_tiny() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .args(["wrap", "--width", "1", "abc"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn wrap_keeps_short_text_on_one_line() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .args(["wrap", "--width", "5000", "hello world"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn render_rejects_malformed_color() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.png");
    paintbox_cmd(&temp)
        .args(["render", "-W", "100", "-H", "50", "--color", "nothex", "-o"])
        .arg(&out)
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a hex digit"));
    assert!(!out.exists());
}

#[test]
fn render_writes_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("paragraph.png");
    paintbox_cmd(&temp)
        .args([
            "render",
            "-W",
            "240",
            "-H",
            "120",
            "--center",
            "--vcenter",
            "--list-char",
            "-",
            "--color",
            "#336699",
            "-o",
        ])
        .arg(&out)
        .arg("- first item that wraps\n- second")
        .assert()
        .success();
    assert!(is_png(&out));
}

#[test]
fn label_with_shadow_writes_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("label.png");
    paintbox_cmd(&temp)
        .args([
            "label",
            "-W",
            "200",
            "-H",
            "40",
            "--justify",
            "right",
            "--shadow",
            "--shadow-color",
            "202020",
            "-o",
        ])
        .arg(&out)
        .arg("Score: 42")
        .assert()
        .success();
    assert!(is_png(&out));
}

#[test]
fn invalid_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[text\nfont_size =").unwrap();
    paintbox_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["wrap", "--width", "100", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    assert!(temp.path().join("paintbox").join("config.toml").exists());

    paintbox_cmd(&temp)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn font_size_override_is_clamped() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .env("RUST_LOG", "warn")
        .args(["--font-size", "0", "wrap", "--width", "5000", "hi"])
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains("Invalid font_size"));
}

/// Reads the premultiplied ARGB pixel at `(x, y)` from a PNG file.
fn pixel_at(path: &std::path::Path, x: usize, y: usize) -> u32 {
    let mut file = std::fs::File::open(path).unwrap();
    let mut image = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let offset = y * stride + x * 4;
    u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap())
}

#[test]
fn border_uses_accent_color() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("accent.toml");
    std::fs::write(&config, "[colors]\naccent = \"#ff0000\"\nbackground = \"white\"\n").unwrap();
    let out = temp.path().join("framed.png");
    paintbox_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["render", "-W", "80", "-H", "40", "--border", "3", "-o"])
        .arg(&out)
        .arg("x")
        .assert()
        .success();
    assert_eq!(pixel_at(&out, 1, 1), 0xffff_0000);
    assert_eq!(pixel_at(&out, 78, 20), 0xffff_0000);
    assert_eq!(pixel_at(&out, 5, 5), 0xffff_ffff);
}

#[test]
fn version_prints_package_version() {
    let temp = TempDir::new().unwrap();
    paintbox_cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("paintbox {}\n", env!("CARGO_PKG_VERSION")));
}
