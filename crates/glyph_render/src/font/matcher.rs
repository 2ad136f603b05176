//! Font discovery through the system fontconfig database.

use std::ffi::CStr;
use std::path::PathBuf;
use std::ptr;

use fontconfig_sys::constants::{FC_CHARSET, FC_FILE};
use fontconfig_sys::{
    FcCharSetAddChar, FcCharSetCreate, FcCharSetDestroy, FcConfigSubstitute, FcDefaultSubstitute,
    FcFini, FcFontMatch, FcInit, FcMatchPattern, FcPatternAddCharSet, FcPatternCreate,
    FcPatternDestroy, FcPatternGetString, FcResultMatch,
};
use log::info;

use crate::RenderError;

/// Process-lifetime handle to the fontconfig library.
///
/// Owns the `FcInit`/`FcFini` pair, so the match context is released on
/// every exit path, early error returns included.
pub struct FontSource {
    _private: (),
}

impl FontSource {
    pub fn init() -> Result<Self, RenderError> {
        // SAFETY: FcInit has no preconditions.
        if unsafe { FcInit() } == 0 {
            return Err(RenderError::FontconfigInit);
        }
        Ok(Self { _private: () })
    }

    /// Asks fontconfig for the font file best covering `code_points`.
    ///
    /// The whole input goes into one character-coverage set, so a single
    /// query is made per run; duplicates and order are irrelevant, and
    /// fontconfig's substitution policy picks the compromise font when no
    /// single font covers everything.
    pub fn match_codepoints(&self, code_points: &[u32]) -> Result<PathBuf, RenderError> {
        // SAFETY: FFI calls; every fontconfig object created below is
        // destroyed on each path out of this block.
        unsafe {
            let pattern = FcPatternCreate();
            if pattern.is_null() {
                return Err(RenderError::NoFontMatch);
            }

            let charset = FcCharSetCreate();
            if charset.is_null() {
                FcPatternDestroy(pattern);
                return Err(RenderError::NoFontMatch);
            }
            for &code_point in code_points {
                FcCharSetAddChar(charset, code_point);
            }
            FcPatternAddCharSet(pattern, FC_CHARSET.as_ptr(), charset);
            FcCharSetDestroy(charset);

            FcConfigSubstitute(ptr::null_mut(), pattern, FcMatchPattern);
            FcDefaultSubstitute(pattern);

            let mut result = FcResultMatch;
            let matched = FcFontMatch(ptr::null_mut(), pattern, &mut result);
            FcPatternDestroy(pattern);
            if matched.is_null() {
                return Err(RenderError::NoFontMatch);
            }

            let mut file = ptr::null_mut();
            let status = FcPatternGetString(matched, FC_FILE.as_ptr(), 0, &mut file);
            let path = if status == FcResultMatch && !file.is_null() {
                Ok(PathBuf::from(CStr::from_ptr(file.cast()).to_string_lossy().into_owned()))
            } else {
                Err(RenderError::MissingFontFile)
            };
            FcPatternDestroy(matched);

            if let Ok(path) = &path {
                info!("matched font file {}", path.display());
            }
            path
        }
    }
}

impl Drop for FontSource {
    fn drop(&mut self) {
        // SAFETY: paired with the FcInit in `init`, called exactly once.
        unsafe { FcFini() };
    }
}
