#[cfg(test)]
mod verify {
    use std::collections::HashMap;

    use veralign::config::Config;
    use veralign::fallback::{align, align_line};

    #[test]
    fn declarations_share_the_tree_mode_columns() {
        // both modes consume the same Config, so fallback output must put
        // fields on the same columns the tree formatter would
        let config = Config::default();

        let port = align_line("input wire signed [7:0] data_in;", &config);
        assert_eq!(port.find("input"), Some(4));
        assert_eq!(port.find("signed"), Some(16));
        assert_eq!(port.find("[ 7:0 ]"), Some(25));
        assert_eq!(port.find("data_in"), Some(50));
        assert_eq!(port.find(';'), Some(80));

        let signal = align_line("reg [3:0] state;", &config);
        assert_eq!(signal.find("reg"), Some(4));
        assert_eq!(signal.find("[ 3:0 ]"), Some(25));
        assert_eq!(signal.find("state"), Some(50));
        assert_eq!(signal.find(';'), Some(80));

        let parameter = align_line("parameter WIDTH = 8;", &config);
        assert_eq!(parameter.find("parameter"), Some(4));
        assert_eq!(parameter.find("WIDTH"), Some(25));
        assert_eq!(parameter.find('='), Some(50));
        assert_eq!(parameter.find(';'), Some(80));

        let assign = align_line("assign y = a & b;", &config);
        assert_eq!(assign.find("assign"), Some(4));
        assert_eq!(assign.find('y'), Some(12));
    }

    #[test]
    fn identifier_lists_are_normalized() {
        let config = Config::default();
        let output = align_line("wire a,b ,  c;", &config);
        assert_eq!(output.find("a, b, c"), Some(50));
    }

    #[test]
    fn unmatched_lines_are_untouched() {
        let config = Config::default();
        for line in [
            "wire badsyntax(",
            "foo bar baz",
            "input",
            "assign y = a & b", // missing semicolon
        ] {
            assert_eq!(align_line(line, &config), line, "line was modified: {}", line);
        }
    }

    #[test]
    fn whole_buffer_alignment_preserves_structure() {
        let config = Config::default();
        let input = "\
module shifter (clk, din, dout);
    input clk;
    input [7:0] din;
    output [7:0] dout;
    reg [7:0] hold;
    assign dout = hold;
endmodule
";
        let output = align(input, &config);
        let lines: Vec<&str> = output
            .lines()
            .collect();

        // module/endmodule lines pass through
        assert_eq!(lines[0], "module shifter (clk, din, dout);");
        assert_eq!(lines[6], "endmodule");
        // declarations are aligned
        assert_eq!(lines[1].find("clk"), Some(50));
        assert_eq!(lines[2].find("[ 7:0 ]"), Some(25));
        assert_eq!(lines[5].find("dout"), Some(12));
        // line count and final newline preserved
        assert_eq!(lines.len(), 7);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn alignment_is_idempotent() {
        let config = Config::default();
        let input = "\
input wire [15:8] hi;
output reg signed [7:0] lo;
parameter DEPTH = 16; // entries
localparam ADDR = 4;
assign next = count + 1;
";
        let once = align(input, &config);
        let twice = align(&once, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn custom_columns_apply_to_fallback_too() {
        let mut options = HashMap::new();
        options.insert("signal_num1".to_string(), 0);
        options.insert("signal_num4".to_string(), 16);
        options.insert("signal_num5".to_string(), 24);
        let config = Config::from_map(&options);

        let output = align_line("wire ready;", &config);
        assert_eq!(output.find("wire"), Some(0));
        assert_eq!(output.find("ready"), Some(16));
        assert_eq!(output.find(';'), Some(24));
    }
}
