use crate::errors::AppResult;
use crate::export::fs_utils::confirm_overwrite;
use crate::store::RecordStore;
use crate::store::log::ttlog_quiet;
use crate::ui::messages::{info, success, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally compressing it.
    ///
    /// Returns the path of the final backup, or `None` if the user declined
    /// to overwrite an existing file.
    pub fn backup(
        store: &RecordStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = store.path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !confirm_overwrite(dest, force)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        ttlog_quiet(
            src,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string())
}

/// Compress a backup: .zip on Windows, .tar.gz elsewhere.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let out = if cfg!(target_os = "windows") {
        compress_zip(path)?
    } else {
        compress_tar_gz(path)?
    };
    info(format!("Compressed: {}", out.display()));
    Ok(out)
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(file_name_of(path), options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let tgz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&tgz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());

    let mut builder = tar::Builder::new(encoder);
    builder.append_path_with_name(path, file_name_of(path))?;
    builder.into_inner()?.finish()?;

    Ok(tgz_path)
}
