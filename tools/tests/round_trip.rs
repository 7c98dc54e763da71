use kpoints::Palette;
use kpoints_tools::generate::Generator;
use kpoints_tools::plot;
use kpoints_tools::Layout;
use point_io::LabeledPoint;
use std::fs;
use std::io;
use std::process::Command;

/// Labels the points of `inputs/<filename>` the way a clustering program
/// would, cycling through `clusters` ids.
fn label(layout: &Layout, filename: &str, clusters: usize) {
    let input = fs::File::open(layout.input(filename)).unwrap();
    let points = point_io::plain::read(io::BufReader::new(input)).unwrap();
    let labeled = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| LabeledPoint {
            point,
            cluster: i % clusters,
        });
    fs::create_dir_all(layout.outputs_dir()).unwrap();
    let output = fs::File::create(layout.labeled_output(filename)).unwrap();
    point_io::labeled::write(io::BufWriter::new(output), labeled).unwrap();
}

#[test]
fn generate_then_plot() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let generator = Generator {
        seed: Some(11),
        ..Generator::new(10, 100).unwrap()
    };
    let path = kpoints_tools::generate::output_path(&layout, "t.txt", true).unwrap();
    generator.write_file(&path).unwrap();
    label(&layout, "t.txt", 2);

    let comparison =
        plot::Comparison::load(&layout, "t.txt", Palette::hls(2).unwrap(), true).unwrap();
    assert_eq!(comparison.before().len(), 10);
    assert_eq!(comparison.after().len(), 10);
    for (before, after) in comparison.before().iter().zip(comparison.after()) {
        assert_eq!(*before, after.point);
        assert!(before.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    let figure = layout.figure("t.txt");
    plot::render_svg_file(&comparison, plot::Size::default(), &figure).unwrap();
    let svg = fs::read_to_string(&figure).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(plot::AFTER_TITLE));
}

#[test]
fn integer_points_are_readable() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let generator = Generator {
        integers: true,
        seed: Some(5),
        ..Generator::new(40, 20).unwrap()
    };
    let path = kpoints_tools::generate::output_path(&layout, "ints.txt", true).unwrap();
    generator.write_file(&path).unwrap();

    let points = point_io::plain::read(kpoints_tools::reader(&path).unwrap()).unwrap();
    assert_eq!(points.len(), 40);
    assert!(points
        .iter()
        .flatten()
        .all(|v| v.fract() == 0.0 && (0.0..=20.0).contains(v)));
}

#[test]
fn empty_files() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let generator = Generator {
        seed: Some(0),
        ..Generator::new(0, 100).unwrap()
    };
    let path = kpoints_tools::generate::output_path(&layout, "empty.txt", true).unwrap();
    generator.write_file(&path).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    label(&layout, "empty.txt", 3);

    let comparison =
        plot::Comparison::load(&layout, "empty.txt", Palette::hls(3).unwrap(), false).unwrap();
    assert!(comparison.before().is_empty());
    plot::render_svg_string(&comparison, plot::Size::default()).unwrap();
}

#[test]
fn missing_labeled_file() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    let path = kpoints_tools::generate::output_path(&layout, "t.txt", true).unwrap();
    Generator::new(5, 10).unwrap().write_file(&path).unwrap();

    let err = plot::Comparison::load(&layout, "t.txt", Palette::hls(3).unwrap(), false)
        .unwrap_err();
    assert!(err.to_string().contains("t.txt.out"), "{err:#}");
}

#[test]
fn malformed_labeled_file() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());
    fs::create_dir_all(layout.inputs_dir()).unwrap();
    fs::create_dir_all(layout.outputs_dir()).unwrap();
    fs::write(layout.input("t.txt"), "1 2\n3 4\n").unwrap();
    fs::write(layout.labeled_output("t.txt"), "1 2 0\n3 4\n").unwrap();

    let err = plot::Comparison::load(&layout, "t.txt", Palette::hls(3).unwrap(), false)
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("t.txt.out"), "{message}");
    assert!(message.contains("at line 2"), "{message}");
}

#[test]
fn command_line() {
    let root = tempfile::tempdir().unwrap();
    let layout = Layout::new(root.path());

    let status = Command::new(env!("CARGO_BIN_EXE_point-gen"))
        .args(["-n", "10", "-m", "100", "-f", "t.txt", "-s", "3", "-I", "-C"])
        .arg(root.path())
        .status()
        .unwrap();
    assert!(status.success());
    let content = fs::read_to_string(layout.input("t.txt")).unwrap();
    assert_eq!(content.lines().count(), 10);

    label(&layout, "t.txt", 2);
    let status = Command::new(env!("CARGO_BIN_EXE_point-plot"))
        .args(["-c", "2", "-f", "t.txt", "--strict", "-C"])
        .arg(root.path())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(layout.figure("t.txt").is_file());

    let output = Command::new(env!("CARGO_BIN_EXE_point-plot"))
        .args(["-c", "1", "-f", "t.txt", "--strict", "-o", "-", "-C"])
        .arg(root.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let status = Command::new(env!("CARGO_BIN_EXE_point-gen"))
        .args(["-m", "-5", "-f", "neg.txt", "-C"])
        .arg(root.path())
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!root.path().join("neg.txt").exists());

    let output = Command::new(env!("CARGO_BIN_EXE_point-gen"))
        .args(["--help", "-C"])
        .arg(root.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: point-gen"));
    assert!(!root.path().join("data.txt").exists());
}
