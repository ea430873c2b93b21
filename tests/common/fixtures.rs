//! Test fixtures - recorded server transcripts.

/// `cvs annotate` of two files, markers and separators on the E channel
pub const ANNOTATE_TWO_FILES: &str = "\
E Annotations for README
E ***************
M 1.1          (alice    12-Mar-24): Project readme
M 1.2          (bob      14-Mar-24): Second line
E Annotations for src/main.c
E ***************
M 1.1          (alice    12-Mar-24): int main(void)
M 1.1          (alice    12-Mar-24): {
M 1.4          (carol    02-Apr-24):     return 0;
M 1.1          (alice    12-Mar-24): }
ok
";

/// `cvs commit` confirming one modified file, one added, and one removed
pub const COMMIT_THREE_FILES: &str = "\
E cvs commit: Examining .
Checked-in ./
/cvsroot/proj/README
/README/1.3///
Checked-in src/
/cvsroot/proj/src/new.c
/new.c/0///
Checked-in src/
/cvsroot/proj/src/old.c
/old.c/-1.2///
M done
ok
";

/// Commit rejected by the server
pub const COMMIT_REJECTED: &str = "\
E cvs commit: Up-to-date check failed for `README'
error  
";
