pub mod line_report_writer;
