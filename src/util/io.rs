use crate::error::SccError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

pub fn get_buf_reader(file_path: &str) -> Result<BufReader<File>, SccError> {
    Ok(BufReader::new(
        File::open(file_path)
            .map_err(|e| SccError::ReadFile(file_path.to_string(), e.to_string()))?,
    ))
}

/// Line-oriented writer for report files.
pub struct GsWriter {
    buf_writer: BufWriter<File>,
    file_path: String,
}

impl GsWriter {
    pub fn new(file_path: String) -> Result<Self, SccError> {
        let buf_writer = BufWriter::new(
            File::create(&file_path)
                .map_err(|e| SccError::CreateFile(file_path.clone(), e.to_string()))?,
        );
        Ok(Self { buf_writer, file_path })
    }

    #[inline]
    pub fn write_file_lines(
        &mut self,
        lines: impl Iterator<Item = String>,
    ) -> Result<(), SccError> {
        for line in lines {
            self.write_file_line(&line)?;
        }
        Ok(())
    }

    #[inline]
    pub fn write_file_line(&mut self, line: &str) -> Result<(), SccError> {
        self.buf_writer
            .write_all([line, "\n"].concat().as_bytes())
            .map_err(|e| SccError::WriteFile(self.file_path.clone(), e.to_string()))
    }

    pub fn flush(&mut self) -> Result<(), SccError> {
        self.buf_writer
            .flush()
            .map_err(|e| SccError::WriteFile(self.file_path.clone(), e.to_string()))
    }
}
