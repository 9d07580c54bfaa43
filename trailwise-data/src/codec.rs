//! Reading and writing record sequences in either format.

use std::io::{BufReader, BufWriter, Read, Write};

use camino::Utf8Path;
use cap_std::fs_utf8;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::fs::{create_utf8_file, open_utf8_file};
use crate::{DataFormat, LoadError, SaveError};

pub(crate) fn load_format(path: &Utf8Path) -> Result<DataFormat, LoadError> {
    let format = DataFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    debug!("reading {path} as {format:?}");
    Ok(format)
}

pub(crate) fn save_format(path: &Utf8Path) -> Result<DataFormat, SaveError> {
    DataFormat::from_path(path).ok_or_else(|| SaveError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

pub(crate) fn open_reader(path: &Utf8Path) -> Result<BufReader<fs_utf8::File>, LoadError> {
    open_utf8_file(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn read_to_string(path: &Utf8Path) -> Result<String, LoadError> {
    let mut text = String::new();
    open_reader(path)?
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}

pub(crate) fn read_csv<R, T>(path: &Utf8Path, reader: R) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn read_json<R, T>(path: &Utf8Path, reader: R) -> Result<T, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    serde_json::from_reader(reader).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn create_writer(path: &Utf8Path) -> Result<BufWriter<fs_utf8::File>, SaveError> {
    create_utf8_file(path)
        .map(BufWriter::new)
        .map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn write_csv<T, I>(path: &Utf8Path, rows: I) -> Result<(), SaveError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(create_writer(path)?);
    for row in rows {
        writer.serialize(row).map_err(|source| SaveError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize>(path: &Utf8Path, document: &T) -> Result<(), SaveError> {
    let mut writer = create_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| SaveError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
