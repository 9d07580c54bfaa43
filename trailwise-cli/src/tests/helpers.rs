//! Test helpers that lay out trail and weather files in a scratch directory.

use super::*;
use camino::Utf8PathBuf;
use tempfile::TempDir;

pub(super) const TRAILS_CSV: &str = "\
id,name,region,start_lat,start_lon,end_lat,end_lon,length_km,elevation_gain,difficulty,terrain_type,tags
T1,Morskie Oko,TATRY,49.2014,20.0711,49.1949,20.0722,7.8,420,2,mountain,\"lake,viewpoint\"
T2,Tarnica Loop,BIESZCZADY,49.0957,22.6613,49.0747,22.7264,15.5,850,3,mountain,panorama
T3,Wdzydze Shore,KASZUBY,54.0290,17.8980,54.0350,17.9320,6.2,40,1,lakeside,
";

pub(super) const WEATHER_CSV: &str = "\
date,location_id,avg_temp,min_temp,max_temp,precipitation,sunshine_hours,cloud_cover
2023-07-01,TATRY,21.5,14.0,26.0,0.0,9.5,15
2023-07-02,TATRY,19.0,12.5,23.0,2.4,5.0,60
2023-07-01,BIESZCZADY,23.0,16.0,28.5,0.0,10.0,10
2023-07-02,BIESZCZADY,24.5,17.5,30.0,0.6,8.0,25
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Scratch directory holding the trail and weather fixtures.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("trails.csv"), TRAILS_CSV.as_bytes());
        write_utf8(&root.join("weather.csv"), WEATHER_CSV.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn trails(&self) -> Utf8PathBuf {
        self.root.join("trails.csv")
    }

    pub(super) fn weather(&self) -> Utf8PathBuf {
        self.root.join("weather.csv")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Run the CLI with `args` after the program name, capturing stdout.
pub(super) fn run_capture(args: &[&str]) -> (Result<(), CliError>, String) {
    let mut stdout = Vec::new();
    let argv = std::iter::once("trailwise").chain(args.iter().copied());
    let outcome = run_with_args(argv, &mut stdout);
    let text = String::from_utf8(stdout).expect("stdout utf-8");
    (outcome, text)
}
