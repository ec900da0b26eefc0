// struct to handle file buffers


use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use log::debug;

pub struct FileBufferHelper {
    pub path: PathBuf,
    pub buffer_reader: BufReader<File>,
    pub line: Vec<u8>
}

impl FileBufferHelper {
    pub fn open(file: &Path) -> io::Result<FileBufferHelper> {
        // initialise instance of FileBufferHelper
        let file_open = File::open(file)?;
        debug!("FileHelper created for: {:?}", file);
        Ok(Self {
            path: file.to_path_buf(),
            buffer_reader: BufReader::new(file_open),
            line: Vec::new(),
        })
    }

    pub fn next_line(&mut self) -> io::Result<bool> {
        // clear the previous line and read the next one, newline included
        // false once the end of the file is reached
        self.line.clear();
        Ok(self.buffer_reader.read_until(b'\n', &mut self.line)? > 0)
    }

    pub fn read_to_bytes(mut self) -> io::Result<Vec<u8>> {
        // drain the remaining lines byte for byte, no encoding assumed
        let mut text = Vec::new();
        while self.next_line()? {
            text.extend_from_slice(&self.line);
        }
        debug!("Read {} bytes from {:?}", text.len(), self.path);
        Ok(text)
    }
}
