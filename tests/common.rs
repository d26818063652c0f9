#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use roombook::models::Booking;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const HEADER: &str = "uuid,status,date,start_time,end_time,user_uuid,name,code,type";

pub const COLAB: &str = "\
uuid,status,date,start_time,end_time,user_uuid,name,code,type
A1,CONFIRMED,2022-11-03,09:00,10:00,U1,Room A,COLAB-01,MEETING ROOM
A2,CONFIRMED,2022-11-04,14:00,15:00,U2,Room B,COLAB-02,CONFERENCE ROOM
A3,CONFIRMED,2022-11-04,11:00,12:00,U3,Board,COLAB-03,BOARDROOM
";

pub const XCOLAB: &str = "\
uuid,status,date,start_time,end_time,user_uuid,name,code,type
X1,CANCELLED,2022-11-03,13:00,14:00,U1,Room C,COLAB-01,DISCUSSION ROOM
";

pub const ITCD: &str = "\
uuid,status,date,start_time,end_time,user_uuid,name,code,type
I1,CONFIRMED,2022-11-02,10:00,11:00,U4,Lab 1,ITCD-55,MEETING ROOM
I2,CONFIRMED,2022-12-01,09:00,09:30,U5,Lab 2,ITCD-56,DISCUSSION ROOM
";

pub const XITCD: &str = "\
uuid,status,date,start_time,end_time,user_uuid,name,code,type
Y1,CANCELLED,2022-11-05,16:00,17:00,U6,Lab 3,ITCD-57,CONFERENCE ROOM
";

pub fn rbk() -> Command {
    cargo_bin_cmd!("roombook")
}

/// A command isolated from the user's config, reading sources from `dir`.
pub fn rbk_in(home: &Path, dir: &Path) -> Command {
    let mut cmd = rbk();
    cmd.env("ROOMBOOK_HOME", home)
        .env_remove("RUST_LOG")
        .args(["--dir", &dir.to_string_lossy()]);
    cmd
}

/// Temp directory holding the four sample sources.
pub fn sample_sources() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write_sources(dir.path(), COLAB, XCOLAB, ITCD, XITCD);
    dir
}

pub fn write_sources(dir: &Path, colab: &str, xcolab: &str, itcd: &str, xitcd: &str) {
    fs::write(dir.join("colab.csv"), colab).expect("write colab.csv");
    fs::write(dir.join("xcolab.csv"), xcolab).expect("write xcolab.csv");
    fs::write(dir.join("itcd.csv"), itcd).expect("write itcd.csv");
    fs::write(dir.join("xitcd.csv"), xitcd).expect("write xitcd.csv");
}

/// Booking with the fields the filter and sort look at.
pub fn booking(uuid: &str, status: &str, code: &str, room_type: &str) -> Booking {
    Booking {
        uuid: uuid.to_string(),
        status: status.to_string(),
        date: "2022-11-03".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        user_uuid: "U1".to_string(),
        name: format!("Room {uuid}"),
        code: code.to_string(),
        room_type: room_type.to_string(),
    }
}

/// A mixed set covering every status, room type and brand, plus rows
/// outside the closed domains.
pub fn mixed_bookings() -> Vec<Booking> {
    vec![
        booking("1", "CONFIRMED", "COLAB-01", "MEETING ROOM"),
        booking("2", "CANCELLED", "COLAB-02", "DISCUSSION ROOM"),
        booking("3", "CONFIRMED", "ITCD-01", "CONFERENCE ROOM"),
        booking("4", "CANCELLED", "ITCD-02", "MEETING ROOM"),
        booking("5", "CONFIRMED", "COLAB-03", "BOARDROOM"),
        booking("6", "PENDING", "ITCD-03", "MEETING ROOM"),
        booking("7", "CONFIRMED", "", "DISCUSSION ROOM"),
        booking("8", "CANCELLED", "XCOLAB", "CONFERENCE ROOM"),
        booking("9", "CONFIRMED", "COLAB-04", "meeting room"),
        booking("10", "", "", ""),
    ]
}
