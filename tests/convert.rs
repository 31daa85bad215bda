use boca2testsys::filter::{strip_long_lines, DEFAULT_MAX_LINE_LEN};
use boca2testsys::import_boca::import_str;
use boca2testsys::testsys::TestsysWriter;
use boca2testsys::verdict::VerdictTable;
use std::fs;
use std::fs::File;
use std::io::BufReader;

#[test]
fn converts_a_raw_export_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let export_path = dir.path().join("export.dat");
    let contest_path = dir.path().join("contest.dat");

    // A corrupt oversized line in the middle would break the XML parse if
    // the pre-filter did not drop it.
    let junk = "<".repeat(DEFAULT_MAX_LINE_LEN + 20);
    let export = format!(
        r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<BOCADUMP>
<CONTESTREC>
<name>ACM &amp; ICPC Mock</name>
<duration>18000</duration>
</CONTESTREC>
{}
<PROBLEMREC>
<number>1</number>
<name>A</name>
<fullname>Sample &amp; Problem</fullname>
</PROBLEMREC>
<USERREC>
<type>judge</type>
<user>3</user>
<userfull>Head Judge</userfull>
</USERREC>
<USERREC>
<type>team</type>
<user>7</user>
<userfull>Team X</userfull>
</USERREC>
<RUNREC>
<number>41</number>
<user>7</user>
<problem>1</problem>
<rundatediff>10</rundatediff>
<runanswer>6</runanswer>
</RUNREC>
<RUNREC>
<number>42</number>
<user>7</user>
<problem>1</problem>
<rundatediff>25</rundatediff>
<runanswer>1</runanswer>
</RUNREC>
</BOCADUMP>
"#,
        junk
    );
    fs::write(&export_path, &export).unwrap();

    let reader = BufReader::new(File::open(&export_path).unwrap());
    let filtered = strip_long_lines(reader, DEFAULT_MAX_LINE_LEN).unwrap();
    assert!(!filtered.contains(&junk));

    let contest = import_str(&filtered, &VerdictTable::boca()).unwrap();
    let output = File::create(&contest_path).unwrap();
    TestsysWriter::new(output).output(&contest).unwrap();

    let expected = "\x1A\n\
@contest \"ACM & ICPC Mock\"\n\
@contlen 300\n\
@problems 1\n\
@teams 1\n\
@submissions 2\n\
@p A,\"Sample & Problem\",20,0\n\
@t 7,0,1,\"Team X\"\n\
@s 7,A,1,10,WA\n\
@s 7,A,2,25,OK\n";
    assert_eq!(fs::read_to_string(&contest_path).unwrap(), expected);
}
