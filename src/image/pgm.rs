//! Binary portable graymap (`P5`) reading and writing.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use super::Image;

const MAGIC: &[u8; 3] = b"P5\n";
/// Upper bound on the sample buffer reserved before any sample has been read.
const MAX_RESERVE: usize = 1 << 20;

fn invalid_data(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

/// Writes the header (magic number, empty comment, size, gray levels) followed by the
/// raw samples row by row.
pub fn encode_pgm<W: Write>(writer: &mut W, image: &Image) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(b"#\n")?;
    write!(
        writer,
        "{} {}\n{:03}\n",
        image.columns(),
        image.rows(),
        image.gray_levels()
    )?;
    writer.write_all(image.pixels())?;
    Ok(())
}

/// Reads the next header line that is not a comment.
fn next_header_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "PGM header ended early",
            ));
        }
        if line.first() != Some(&b'#') {
            return String::from_utf8(line).map_err(|_| invalid_data("PGM header is not ASCII"));
        }
    }
}

/// Parses a binary PGM stream.
///
/// Requires the exact `P5\n` magic number, skips `#` comment lines, then expects a
/// `width height` line, a gray-level line, and `width * height` one-byte samples.
/// Anything after the samples is ignored.
pub fn decode_pgm<R: BufRead>(reader: &mut R) -> io::Result<Image> {
    let mut magic = [0u8; 3];
    reader
        .read_exact(&mut magic)
        .map_err(|_| invalid_data("expected a .pgm file"))?;
    if &magic != MAGIC {
        return Err(invalid_data("expected a .pgm file"));
    }

    let size_line = next_header_line(reader)?;
    let dims = size_line
        .split_whitespace()
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid_data(format!("bad image size {:?}", size_line.trim())))?;
    let [columns, rows] = dims[..] else {
        return Err(invalid_data(format!(
            "bad image size {:?}",
            size_line.trim()
        )));
    };

    let levels_line = next_header_line(reader)?;
    let gray_levels = levels_line
        .trim()
        .parse::<u8>()
        .map_err(|_| invalid_data(format!("bad gray levels {:?}", levels_line.trim())))?;

    let len = rows
        .checked_mul(columns)
        .ok_or_else(|| invalid_data("image size overflows"))?;
    // The header is untrusted: let the buffer grow with the samples actually present
    let mut pixels = Vec::with_capacity(len.min(MAX_RESERVE));
    reader.take(len as u64).read_to_end(&mut pixels)?;
    if pixels.len() != len {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short file"));
    }

    Ok(Image::from_pixels(rows, columns, gray_levels, pixels))
}

/// Writes `image` to `path` as a binary PGM.
///
/// A file left half-written by a failed write is removed.
pub fn write_pgm(path: impl AsRef<Path>, image: &Image) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let result = encode_pgm(&mut writer, image).and_then(|_| writer.flush());
    drop(writer);
    match result {
        Ok(()) => {
            tracing::debug!(
                path = %path.display(),
                rows = image.rows(),
                columns = image.columns(),
                "Wrote PGM image"
            );
            Ok(())
        }
        Err(e) => {
            let _ = std::fs::remove_file(path); // ignore, the write error is what matters
            Err(e)
        }
    }
}

/// Reads a binary PGM from `path`.
pub fn read_pgm(path: impl AsRef<Path>) -> io::Result<Image> {
    let path = path.as_ref();
    let image = decode_pgm(&mut BufReader::new(File::open(path)?))?;
    tracing::debug!(
        path = %path.display(),
        rows = image.rows(),
        columns = image.columns(),
        "Read PGM image"
    );
    Ok(image)
}
