//! Code formatter for Verilog and SystemVerilog
//!
//! One rendering rule per syntax construct, dispatched from `format_node`
//! by node kind. Construct renderers call back into the dispatcher for
//! child statements, the layout engine for field placement and the comment
//! ledger for emission. Expressions are never column-aligned; they go
//! through raw reconstruction.

use crate::config::Config;
use crate::formatting::comments::CommentLedger;
use crate::formatting::layout::{indentation, LineBuilder, INDENT};
use crate::formatting::{layout, raw};
use crate::language::{CommentInfo, NodeKind, SyntaxNode};

/// Format a whole tree. One call, one ledger.
pub fn format_tree(root: &SyntaxNode, config: &Config) -> String {
    let mut formatter = Formatter::new(config);
    let mut output = formatter.format_node(root, 0);

    // strip end-of-file artifacts, then guarantee the final newline
    let kept = output
        .trim_end()
        .len();
    output.truncate(kept);
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Target columns for one five-field declaration family.
struct FieldColumns {
    keyword: usize,
    sign: usize,
    range: usize,
    ident: usize,
    term: Option<usize>,
}

pub struct Formatter<'a> {
    config: &'a Config,
    ledger: CommentLedger,
}

impl<'a> Formatter<'a> {
    pub fn new(config: &'a Config) -> Formatter<'a> {
        Formatter {
            config,
            ledger: CommentLedger::new(),
        }
    }

    /// The single recursive entry point. Dispatches to the construct
    /// renderer for the node's kind, falling back to raw reconstruction,
    /// and wraps the result with comments, the indent prefix and the
    /// trailing-newline policy.
    pub fn format_node(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let kind = node.kind();
        let prefix = indentation(indent);

        // a begin/end wrapper around a single simple assignment is elided
        if kind == Some(NodeKind::SeqBlock) {
            if let Some(single) = collapse_target(node) {
                return self.delegate(node, single, indent);
            }
        }
        if kind == Some(NodeKind::Statement) {
            let inner: Vec<&SyntaxNode> = node
                .children
                .iter()
                .filter(|child| !child.is_token())
                .collect();
            if inner.len() == 1 {
                return self.delegate(node, inner[0], indent);
            }
        }

        let mut swept: Option<(Vec<&CommentInfo>, Vec<&CommentInfo>)> = None;
        let body = match kind {
            Some(NodeKind::SourceFile) => self.format_source_file(node, indent),
            Some(NodeKind::ModuleDeclaration) => self.format_module(node, indent),
            Some(NodeKind::AnsiPortDeclaration) => {
                let line = self.format_declaration_line(node, indent, &self.port_columns(false));
                self.append_identifier_comments(node, line)
            }
            Some(NodeKind::PortDeclaration) => {
                let line = self.format_declaration_line(node, indent, &self.port_columns(true));
                self.append_identifier_comments(node, line)
            }
            Some(NodeKind::NetDeclaration)
            | Some(NodeKind::RegDeclaration)
            | Some(NodeKind::IntegerDeclaration) => {
                let line = self.format_declaration_line(node, indent, &self.signal_columns());
                self.append_identifier_comments(node, line)
            }
            Some(NodeKind::ParameterDeclaration) | Some(NodeKind::LocalparamDeclaration) => {
                self.format_parameter_declaration(node, indent)
            }
            Some(NodeKind::ParamAssignment) => {
                let mut line = LineBuilder::new(INDENT.len() * indent);
                self.push_param_assignment(&mut line, node);
                line.into_string()
            }
            Some(NodeKind::ModuleInstantiation) => self.format_instantiation(node, indent),
            Some(NodeKind::NamedPortConnection) | Some(NodeKind::OrderedPortConnection) => {
                self.format_connection(node, indent, self.config.inst_port_value_col)
            }
            Some(NodeKind::NamedParameterAssignment)
            | Some(NodeKind::OrderedParameterAssignment) => {
                self.format_connection(node, indent, self.config.inst_param_value_col)
            }
            Some(NodeKind::ContinuousAssign) => self.format_continuous_assign(node, indent),
            Some(NodeKind::AlwaysConstruct) => self.format_always(node, indent),
            Some(NodeKind::InitialConstruct) => self.format_initial(node, indent),
            Some(NodeKind::SeqBlock) => self.format_seq_block(node, indent),
            Some(NodeKind::ConditionalStatement) => self.format_conditional(node, indent),
            Some(NodeKind::LoopStatement) => self.format_loop(node, indent),
            Some(NodeKind::Eof) => String::new(),
            _ => {
                // unrecognized kinds, expressions and stray tokens all
                // reconstruct; comments buried in the subtree still go
                // through the ledger
                swept = Some(raw::collect_comments(node));
                raw::reconstruct(node)
            }
        };

        let mut output = self
            .ledger
            .emit(&node.leading_comments, &prefix);
        if let Some((leading, _)) = &swept {
            for comment in leading {
                if self
                    .ledger
                    .consume(comment)
                {
                    output.push_str(&prefix);
                    output.push_str(&comment.text);
                    output.push('\n');
                }
            }
        }

        let skip_prefix = matches!(
            kind,
            Some(NodeKind::SourceFile) | Some(NodeKind::ModuleDeclaration)
        ) || body.is_empty()
            || body.starts_with('\n');
        if !skip_prefix {
            output.push_str(&prefix);
        }
        output.push_str(&body);

        if let Some((_, trailing)) = &swept {
            for comment in trailing {
                if self
                    .ledger
                    .consume(comment)
                {
                    output.push(' ');
                    output.push_str(&comment.text);
                }
            }
        }

        let mut output = self
            .ledger
            .emit_trailing(&node.trailing_comments, output, &prefix);

        // leftovers from subtrees the renderers flattened; first sighting
        // above has already claimed the well-placed ones
        output = self.sweep_leftovers(node, output);

        if kind.map_or(false, |k| k.is_major()) && !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        output
    }

    /// Render a wrapper node as its single meaningful child, keeping the
    /// wrapper's own comments.
    fn delegate(&mut self, node: &SyntaxNode, inner: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let mut output = self
            .ledger
            .emit(&node.leading_comments, &prefix);
        output.push_str(&self.format_node(inner, indent));
        let output = self
            .ledger
            .emit_trailing(&node.trailing_comments, output, &prefix);
        self.sweep_leftovers(node, output)
    }

    /// Any comment in the subtree that no renderer placed gets appended
    /// inline rather than dropped.
    fn sweep_leftovers(&mut self, node: &SyntaxNode, content: String) -> String {
        let (leading, trailing) = raw::collect_comments(node);
        let mut pending = Vec::new();
        for comment in leading
            .into_iter()
            .chain(trailing)
        {
            if self
                .ledger
                .consume(comment)
            {
                pending.push(comment.clone());
            }
        }
        if pending.is_empty() {
            return content;
        }

        let ends_with_newline = content.ends_with('\n');
        let mut output = content;
        if ends_with_newline {
            output.pop();
        }
        for comment in pending {
            output.push(' ');
            output.push_str(&comment.text);
        }
        if ends_with_newline {
            output.push('\n');
        }
        output
    }

    fn format_source_file(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let mut output = String::new();
        for child in &node.children {
            let text = self.format_node(child, indent);
            if text.is_empty() {
                continue;
            }
            // blank line between top-level items
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&text);
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }
        output
    }

    fn format_module(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let mut output = String::new();
        output.push_str(&prefix);
        output.push_str("module");

        if let Some(name) = node.find_child(NodeKind::Identifier) {
            output.push(' ');
            output.push_str(name.token_text());
        }

        if let Some(parameters) = node.find_child(NodeKind::ModuleParameterPortList) {
            output.push_str(" #(\n");
            output.push_str(&self.format_header_parameters(parameters, indent + 1));
            output.push_str(&prefix);
            output.push(')');
        }

        if let Some(ports) = node.find_child(NodeKind::PortDeclarationList) {
            output.push_str(" (\n");
            output.push_str(&self.format_port_list(ports, indent + 1));
            output.push_str(&prefix);
            output.push(')');
        }

        output.push_str(";\n");

        for child in &node.children {
            if child.is_token()
                || child.is(NodeKind::ModuleParameterPortList)
                || child.is(NodeKind::PortDeclarationList)
            {
                continue;
            }
            output.push_str(&self.format_node(child, indent + 1));
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }

        let closing = format!("{}endmodule\n", prefix);
        match node.find_keyword(&["endmodule"]) {
            Some(keyword) => {
                output.push_str(&self.ledger.emit(
                    &keyword.leading_comments,
                    &indentation(indent + 1),
                ));
                output.push_str(&self.ledger.emit_trailing(
                    &keyword.trailing_comments,
                    closing,
                    &prefix,
                ));
            }
            None => output.push_str(&closing),
        }
        output
    }

    /// ANSI port declarations (or plain port names) inside the module
    /// header, one per line, comma-separated, each at one deeper indent.
    fn format_port_list(&mut self, ports: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let entries: Vec<&SyntaxNode> = ports
            .children
            .iter()
            .filter(|child| {
                child.is(NodeKind::AnsiPortDeclaration) || child.is(NodeKind::Identifier)
            })
            .collect();

        let mut output = String::new();
        for (i, entry) in entries
            .iter()
            .enumerate()
        {
            output.push_str(
                &self
                    .ledger
                    .emit(&entry.leading_comments, &prefix),
            );
            output.push_str(&prefix);
            if entry.is(NodeKind::AnsiPortDeclaration) {
                let columns = self.port_columns(false);
                output.push_str(&self.format_declaration_line(entry, indent, &columns));
            } else {
                output.push_str(entry.token_text());
            }
            if i + 1 < entries.len() {
                output.push(',');
            }
            if let Some(identifier) = entry.last_identifier() {
                output.push_str(
                    &self
                        .ledger
                        .emit_inline(&identifier.trailing_comments),
                );
            }
            output.push_str(
                &self
                    .ledger
                    .emit_inline(&entry.trailing_comments),
            );
            output.push('\n');
        }
        output
    }

    /// Parameter entries inside the `#( ... )` header list.
    fn format_header_parameters(&mut self, parameters: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let entries: Vec<&SyntaxNode> = parameters
            .children
            .iter()
            .filter(|child| {
                matches!(
                    child.kind(),
                    Some(NodeKind::ParameterDeclaration)
                        | Some(NodeKind::LocalparamDeclaration)
                        | Some(NodeKind::ParamAssignment)
                )
            })
            .collect();

        let mut output = String::new();
        for (i, entry) in entries
            .iter()
            .enumerate()
        {
            output.push_str(
                &self
                    .ledger
                    .emit(&entry.leading_comments, &prefix),
            );
            output.push_str(&prefix);
            if entry.is(NodeKind::ParamAssignment) {
                let mut line = LineBuilder::new(INDENT.len() * indent);
                self.push_param_assignment(&mut line, entry);
                output.push_str(&line.into_string());
            } else {
                output.push_str(&self.format_parameter_declaration(entry, indent));
            }
            if i + 1 < entries.len() {
                output.push(',');
            }
            if let Some(identifier) = entry.last_identifier() {
                output.push_str(
                    &self
                        .ledger
                        .emit_inline(&identifier.trailing_comments),
                );
            }
            output.push_str(
                &self
                    .ledger
                    .emit_inline(&entry.trailing_comments),
            );
            output.push('\n');
        }
        output
    }

    fn port_columns(&self, with_terminator: bool) -> FieldColumns {
        FieldColumns {
            keyword: self
                .config
                .port_num1,
            sign: self
                .config
                .port_num2,
            range: self
                .config
                .port_num3,
            ident: self
                .config
                .port_num4,
            term: with_terminator.then(|| {
                self.config
                    .port_num5
            }),
        }
    }

    fn signal_columns(&self) -> FieldColumns {
        FieldColumns {
            keyword: self
                .config
                .signal_num1,
            sign: self
                .config
                .signal_num2,
            range: self
                .config
                .signal_num3,
            ident: self
                .config
                .signal_num4,
            term: Some(
                self.config
                    .signal_num5,
            ),
        }
    }

    /// The shared five-field declaration layout: leading keyword, any
    /// further keywords inline, signed/unsigned, bit range, identifier
    /// list, optional terminator. Fields that are absent are skipped and
    /// the next one pads to its own column.
    fn format_declaration_line(
        &self,
        node: &SyntaxNode,
        indent: usize,
        columns: &FieldColumns,
    ) -> String {
        let mut line = LineBuilder::new(INDENT.len() * indent);

        let mut first = true;
        for child in &node.children {
            if !child.is(NodeKind::Keyword) {
                continue;
            }
            let word = child.token_text();
            if word == "signed" || word == "unsigned" {
                line.field(columns.sign, word);
            } else if first {
                line.field(columns.keyword, word);
                first = false;
            } else {
                line.space();
                line.push(word);
            }
        }

        if let Some(range) = node.find_child(NodeKind::PackedRange) {
            line.field(columns.range, &self.format_packed_range(range));
        }

        let names: Vec<&str> = node
            .children_of(NodeKind::Identifier)
            .map(SyntaxNode::token_text)
            .collect();
        if !names.is_empty() {
            line.field(columns.ident, &names.join(", "));
        }

        if let Some(term) = columns.term {
            line.field(term, ";");
        }

        line.into_string()
    }

    /// Trailing comments of a declaration attach to its last identifier.
    fn append_identifier_comments(&mut self, node: &SyntaxNode, line: String) -> String {
        let mut output = line;
        if let Some(identifier) = node.last_identifier() {
            output.push_str(
                &self
                    .ledger
                    .emit_inline(&identifier.trailing_comments),
            );
        }
        output
    }

    fn format_packed_range(&self, range: &SyntaxNode) -> String {
        let mut msb = String::new();
        let mut lsb = String::new();
        let mut after_colon = false;
        for child in &range.children {
            match child.kind() {
                Some(NodeKind::Lbrack) | Some(NodeKind::Rbrack) => {}
                Some(NodeKind::Colon) => after_colon = true,
                _ => {
                    let text = raw::reconstruct(child);
                    if after_colon {
                        lsb.push_str(&text);
                    } else {
                        msb.push_str(&text);
                    }
                }
            }
        }
        layout::format_range(&msb, &lsb, self.config)
    }

    fn format_parameter_declaration(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let unit = INDENT.len();
        let mut first = LineBuilder::new(unit * indent);

        if let Some(keyword) = node
            .children
            .iter()
            .find(|child| child.is(NodeKind::Keyword))
        {
            first.field(
                self.config
                    .param_num1,
                keyword.token_text(),
            );
        }
        if let Some(sign) = node.find_keyword(&["signed", "unsigned"]) {
            first.space();
            first.push(sign.token_text());
        }
        if let Some(range) = node.find_child(NodeKind::PackedRange) {
            first.space();
            first.push(&self.format_packed_range(range));
        }

        // each further assignment goes on its own line, one indent deeper
        let mut builders: Vec<(String, LineBuilder)> = vec![(String::new(), first)];
        let assignments: Vec<&SyntaxNode> = node
            .children_of(NodeKind::ParamAssignment)
            .collect();
        for (i, assignment) in assignments
            .iter()
            .enumerate()
        {
            if i > 0 {
                builders.push((
                    indentation(indent + 1),
                    LineBuilder::new(unit * (indent + 1)),
                ));
            }
            let (_, builder) = builders
                .last_mut()
                .unwrap();
            self.push_param_assignment(builder, assignment);
        }

        if node
            .find_child(NodeKind::Semi)
            .is_some()
        {
            let (_, builder) = builders
                .last_mut()
                .unwrap();
            builder.field(
                self.config
                    .param_num4,
                ";",
            );
        }

        let mut output = String::new();
        for (i, (line_prefix, builder)) in builders
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                output.push_str(",\n");
                output.push_str(&line_prefix);
            }
            output.push_str(&builder.into_string());
        }

        if let Some(semi) = node.find_child(NodeKind::Semi) {
            output.push_str(
                &self
                    .ledger
                    .emit_inline(&semi.trailing_comments),
            );
        }
        self.append_identifier_comments(node, output)
    }

    /// `name = value` with the identifier and `=` at their configured
    /// columns; the value follows the `=` after a single space.
    fn push_param_assignment(&self, line: &mut LineBuilder, assignment: &SyntaxNode) {
        let mut name = None;
        let mut value = String::new();
        for child in &assignment.children {
            match child.kind() {
                Some(NodeKind::Identifier) if name.is_none() => name = Some(child.token_text()),
                Some(NodeKind::AssignEq) | Some(NodeKind::Comma) | Some(NodeKind::Semi) => {}
                _ => value.push_str(&raw::reconstruct(child)),
            }
        }
        if let Some(name) = name {
            line.field(
                self.config
                    .param_num2,
                name,
            );
        }
        line.field(
            self.config
                .param_num3,
            "=",
        );
        if !value.is_empty() {
            line.push(" ");
            line.push(&value);
        }
    }

    fn format_instantiation(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let mut output = String::new();

        if let Some(name) = node.find_child(NodeKind::Identifier) {
            output.push_str(name.token_text());
        }

        if let Some(parameters) = node.find_child(NodeKind::ParameterValueAssignment) {
            output.push_str(" #(\n");
            output.push_str(&self.format_connection_list(
                parameters,
                indent + 1,
                self.config
                    .inst_param_value_col,
            ));
            output.push_str(&prefix);
            output.push(')');
        }

        let instances: Vec<&SyntaxNode> = node
            .children_of(NodeKind::HierarchicalInstance)
            .collect();
        for (i, instance) in instances
            .iter()
            .enumerate()
        {
            if i == 0 {
                output.push(' ');
            } else {
                output.push_str(",\n");
                output.push_str(&prefix);
            }
            output.push_str(&self.format_instance(instance, indent));
        }

        output.push(';');
        output
    }

    fn format_instance(&mut self, instance: &SyntaxNode, indent: usize) -> String {
        let mut output = String::new();
        if let Some(name) = instance.find_child(NodeKind::Identifier) {
            output.push_str(name.token_text());
            output.push(' ');
        }
        output.push_str("(\n");
        output.push_str(&self.format_connection_list(
            instance,
            indent + 1,
            self.config
                .inst_port_value_col,
        ));
        output.push_str(&indentation(indent));
        output.push(')');
        output
    }

    /// Named or ordered connections, one per line, `.name` left-aligned
    /// and `(value)` starting at the configured column.
    fn format_connection_list(
        &mut self,
        parent: &SyntaxNode,
        indent: usize,
        value_column: usize,
    ) -> String {
        let prefix = indentation(indent);
        let entries: Vec<&SyntaxNode> = parent
            .children
            .iter()
            .filter(|child| {
                matches!(
                    child.kind(),
                    Some(NodeKind::NamedPortConnection)
                        | Some(NodeKind::OrderedPortConnection)
                        | Some(NodeKind::NamedParameterAssignment)
                        | Some(NodeKind::OrderedParameterAssignment)
                )
            })
            .collect();

        let mut output = String::new();
        for (i, entry) in entries
            .iter()
            .enumerate()
        {
            output.push_str(
                &self
                    .ledger
                    .emit(&entry.leading_comments, &prefix),
            );
            output.push_str(&prefix);
            output.push_str(&self.format_connection(entry, indent, value_column));
            if i + 1 < entries.len() {
                output.push(',');
            }
            if let Some(identifier) = entry.last_identifier() {
                output.push_str(
                    &self
                        .ledger
                        .emit_inline(&identifier.trailing_comments),
                );
            }
            output.push_str(
                &self
                    .ledger
                    .emit_inline(&entry.trailing_comments),
            );
            output.push('\n');
        }
        output
    }

    fn format_connection(&self, entry: &SyntaxNode, indent: usize, value_column: usize) -> String {
        let named = entry
            .find_child(NodeKind::Dot)
            .is_some();
        if !named {
            return raw::reconstruct(entry);
        }

        let mut name = None;
        let mut value = String::new();
        for child in &entry.children {
            match child.kind() {
                Some(NodeKind::Dot) | Some(NodeKind::Lparen) | Some(NodeKind::Rparen) => {}
                Some(NodeKind::Identifier) if name.is_none() => name = Some(child.token_text()),
                _ => value.push_str(&raw::reconstruct(child)),
            }
        }

        let mut line = LineBuilder::new(INDENT.len() * indent);
        line.push(".");
        if let Some(name) = name {
            line.push(name);
        }
        line.field(value_column, &format!("({})", value));
        line.into_string()
    }

    fn format_continuous_assign(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let mut line = LineBuilder::new(INDENT.len() * indent);
        line.field(
            self.config
                .assign_num1,
            "assign",
        );

        let assignments: Vec<&SyntaxNode> = node
            .children_of(NodeKind::NetAssignment)
            .collect();
        for (i, assignment) in assignments
            .iter()
            .enumerate()
        {
            let text = raw::reconstruct(assignment);
            if i == 0 {
                line.field(
                    self.config
                        .assign_num2,
                    &text,
                );
            } else {
                line.push(", ");
                line.push(&text);
            }
        }
        line.push(";");

        let mut output = line.into_string();
        if let Some(last) = assignments.last() {
            if let Some(lvalue) = last
                .children
                .first()
            {
                if let Some(identifier) = lvalue.last_identifier() {
                    output.push_str(
                        &self
                            .ledger
                            .emit_inline(&identifier.trailing_comments),
                    );
                }
            }
        }
        output
    }

    fn format_always(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let mut output = String::from("always");
        if let Some(event) = node.find_child(NodeKind::EventControl) {
            output.push(' ');
            output.push_str(&raw::reconstruct(event));
        }
        if let Some(body) = procedural_body(node) {
            output.push_str(&self.format_attached_body(body, indent));
        }
        output
    }

    fn format_initial(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let mut output = String::from("initial");
        if let Some(body) = procedural_body(node) {
            output.push_str(&self.format_attached_body(body, indent));
        }
        output
    }

    /// `begin ... end` on its own lines, statements one level deeper. The
    /// collapsed single-assignment case never reaches here; the dispatcher
    /// handles it first.
    fn format_seq_block(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);
        let mut output = String::new();

        let begin = node.find_keyword(&["begin"]);
        output.push_str("begin");
        if let Some(keyword) = begin {
            output = self
                .ledger
                .emit_trailing(&keyword.trailing_comments, output, &prefix);
        }
        output.push('\n');

        for child in &node.children {
            if child.is_token() {
                continue;
            }
            output.push_str(&self.format_node(child, indent + 1));
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }

        if let Some(keyword) = node.find_keyword(&["end"]) {
            output.push_str(&self.ledger.emit(
                &keyword.leading_comments,
                &indentation(indent + 1),
            ));
            let closing = format!("{}end", prefix);
            output.push_str(&self.ledger.emit_trailing(
                &keyword.trailing_comments,
                closing,
                &prefix,
            ));
        } else {
            output.push_str(&prefix);
            output.push_str("end");
        }
        output
    }

    /// Body placement shared by conditionals, loops and procedural blocks:
    /// a real begin/end block keeps `begin` on the construct's line, any
    /// other statement starts on the next line one level deeper.
    fn format_attached_body(&mut self, body: &SyntaxNode, indent: usize) -> String {
        let peeled = peel(body);
        if peeled.is(NodeKind::SeqBlock) && collapse_target(peeled).is_none() {
            let mut output = String::from(" ");
            output.push_str(&self.format_seq_block(peeled, indent));
            output.push('\n');
            output
        } else {
            let mut output = String::from("\n");
            output.push_str(&self.format_node(body, indent + 1));
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
    }

    fn format_conditional(&mut self, node: &SyntaxNode, indent: usize) -> String {
        let prefix = indentation(indent);

        let mut condition = String::new();
        let mut then_body = None;
        let mut else_body = None;
        let mut in_condition = false;
        let mut seen_else = false;
        for child in &node.children {
            match child.kind() {
                Some(NodeKind::Lparen) if then_body.is_none() => in_condition = true,
                Some(NodeKind::Rparen) if in_condition => in_condition = false,
                Some(NodeKind::Keyword) if child.is_keyword("else") => seen_else = true,
                Some(NodeKind::Keyword) => {}
                _ => {
                    if in_condition {
                        condition.push_str(&raw::reconstruct(child));
                    } else if child.is_token() {
                        continue;
                    } else if seen_else {
                        else_body.get_or_insert(child);
                    } else {
                        then_body.get_or_insert(child);
                    }
                }
            }
        }

        let mut output = format!("if ({})", condition);
        if let Some(body) = then_body {
            output.push_str(&self.format_attached_body(body, indent));
        } else {
            output.push('\n');
        }

        if let Some(body) = else_body {
            output.push_str(&prefix);
            output.push_str("else");
            let peeled = peel(body);
            if peeled.is(NodeKind::ConditionalStatement) {
                output.push(' ');
                output.push_str(&self.format_conditional(peeled, indent));
            } else {
                output.push_str(&self.format_attached_body(body, indent));
            }
        }
        output
    }

    fn format_loop(&mut self, node: &SyntaxNode, indent: usize) -> String {
        // the three clauses render inline, never column-aligned
        let mut clauses: Vec<String> = vec![String::new()];
        let mut body = None;
        let mut in_header = false;
        for child in &node.children {
            match child.kind() {
                Some(NodeKind::Lparen) if body.is_none() && !in_header => in_header = true,
                Some(NodeKind::Rparen) if in_header => in_header = false,
                Some(NodeKind::Semi) if in_header => clauses.push(String::new()),
                Some(NodeKind::Keyword) => {}
                _ => {
                    if in_header {
                        let clause = clauses
                            .last_mut()
                            .unwrap();
                        clause.push_str(&raw::reconstruct(child));
                    } else if !child.is_token() {
                        body.get_or_insert(child);
                    }
                }
            }
        }

        let mut output = format!("for ({})", clauses.join("; "));
        if let Some(body) = body {
            output.push_str(&self.format_attached_body(body, indent));
        }
        output
    }
}

/// The statement or block a procedural construct hangs off of.
fn procedural_body(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.children
        .iter()
        .find(|child| !child.is_token() && !child.is(NodeKind::EventControl))
}

/// Unwrap generic statement wrappers down to the statement they carry.
fn peel(node: &SyntaxNode) -> &SyntaxNode {
    if node.is(NodeKind::Statement) {
        let inner: Vec<&SyntaxNode> = node
            .children
            .iter()
            .filter(|child| !child.is_token())
            .collect();
        if inner.len() == 1 {
            return peel(inner[0]);
        }
    }
    node
}

/// The central begin/end collapse predicate: a block is elided exactly when
/// it holds one statement and that statement is a single blocking or
/// non-blocking assignment. Anything else keeps its wrapper.
fn collapse_target(block: &SyntaxNode) -> Option<&SyntaxNode> {
    let statements: Vec<&SyntaxNode> = block
        .children
        .iter()
        .filter(|child| !child.is_token())
        .collect();
    if statements.len() != 1 {
        return None;
    }
    match peel(statements[0]).kind() {
        Some(NodeKind::BlockingAssignment) | Some(NodeKind::NonblockingAssignment) => {
            Some(statements[0])
        }
        _ => None,
    }
}
