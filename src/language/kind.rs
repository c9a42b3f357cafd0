//! The closed vocabulary of construct and token kinds
//!
//! The external parser tags every node with a name. Construct kinds use
//! snake_case grammar-node names; terminal token kinds use upper-case names.
//! A name outside this vocabulary is not an error: the formatter falls back
//! to raw text reconstruction for that subtree.

/// Every node kind the formatter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    // constructs
    SourceFile,
    ModuleDeclaration,
    ModuleParameterPortList,
    PortDeclarationList,
    AnsiPortDeclaration,
    PortDeclaration,
    NetDeclaration,
    RegDeclaration,
    IntegerDeclaration,
    ParameterDeclaration,
    LocalparamDeclaration,
    ParamAssignment,
    ModuleInstantiation,
    ParameterValueAssignment,
    NamedParameterAssignment,
    OrderedParameterAssignment,
    HierarchicalInstance,
    NamedPortConnection,
    OrderedPortConnection,
    ContinuousAssign,
    NetAssignment,
    AlwaysConstruct,
    InitialConstruct,
    EventControl,
    SeqBlock,
    ConditionalStatement,
    LoopStatement,
    BlockingAssignment,
    NonblockingAssignment,
    Statement,
    Expression,
    HierarchicalIdentifier,
    Select,
    PackedRange,

    // tokens
    Identifier,
    Number,
    StringLiteral,
    Keyword,
    Comma,
    Semi,
    Colon,
    Dot,
    Hash,
    At,
    Question,
    Lparen,
    Rparen,
    Lbrack,
    Rbrack,
    Lbrace,
    Rbrace,
    AssignEq,
    AssignLe,
    BinaryOp,
    UnaryOp,
    Eof,
}

impl NodeKind {
    pub fn from_name(name: &str) -> Option<NodeKind> {
        let kind = match name {
            "source_file" => NodeKind::SourceFile,
            "module_declaration" => NodeKind::ModuleDeclaration,
            "module_parameter_port_list" => NodeKind::ModuleParameterPortList,
            "port_declaration_list" => NodeKind::PortDeclarationList,
            "ansi_port_declaration" => NodeKind::AnsiPortDeclaration,
            "port_declaration" => NodeKind::PortDeclaration,
            "net_declaration" => NodeKind::NetDeclaration,
            "reg_declaration" => NodeKind::RegDeclaration,
            "integer_declaration" => NodeKind::IntegerDeclaration,
            "parameter_declaration" => NodeKind::ParameterDeclaration,
            "localparam_declaration" => NodeKind::LocalparamDeclaration,
            "param_assignment" => NodeKind::ParamAssignment,
            "module_instantiation" => NodeKind::ModuleInstantiation,
            "parameter_value_assignment" => NodeKind::ParameterValueAssignment,
            "named_parameter_assignment" => NodeKind::NamedParameterAssignment,
            "ordered_parameter_assignment" => NodeKind::OrderedParameterAssignment,
            "hierarchical_instance" => NodeKind::HierarchicalInstance,
            "named_port_connection" => NodeKind::NamedPortConnection,
            "ordered_port_connection" => NodeKind::OrderedPortConnection,
            "continuous_assign" => NodeKind::ContinuousAssign,
            "net_assignment" => NodeKind::NetAssignment,
            "always_construct" => NodeKind::AlwaysConstruct,
            "initial_construct" => NodeKind::InitialConstruct,
            "event_control" => NodeKind::EventControl,
            "seq_block" => NodeKind::SeqBlock,
            "conditional_statement" => NodeKind::ConditionalStatement,
            "loop_statement" => NodeKind::LoopStatement,
            "blocking_assignment" => NodeKind::BlockingAssignment,
            "nonblocking_assignment" => NodeKind::NonblockingAssignment,
            "statement" => NodeKind::Statement,
            "expression" => NodeKind::Expression,
            "hierarchical_identifier" => NodeKind::HierarchicalIdentifier,
            "select" => NodeKind::Select,
            "packed_range" => NodeKind::PackedRange,

            "IDENTIFIER" => NodeKind::Identifier,
            "NUMBER" => NodeKind::Number,
            "STRING" => NodeKind::StringLiteral,
            "KEYWORD" => NodeKind::Keyword,
            "COMMA" => NodeKind::Comma,
            "SEMI" => NodeKind::Semi,
            "COLON" => NodeKind::Colon,
            "DOT" => NodeKind::Dot,
            "HASH" => NodeKind::Hash,
            "AT" => NodeKind::At,
            "QUESTION" => NodeKind::Question,
            "LPAREN" => NodeKind::Lparen,
            "RPAREN" => NodeKind::Rparen,
            "LBRACK" => NodeKind::Lbrack,
            "RBRACK" => NodeKind::Rbrack,
            "LBRACE" => NodeKind::Lbrace,
            "RBRACE" => NodeKind::Rbrace,
            "ASSIGN_EQ" => NodeKind::AssignEq,
            "ASSIGN_LE" => NodeKind::AssignLe,
            "BINARY_OP" => NodeKind::BinaryOp,
            "UNARY_OP" => NodeKind::UnaryOp,
            "EOF" => NodeKind::Eof,

            _ => return None,
        };
        Some(kind)
    }

    /// Major block and statement kinds whose rendering must end with a
    /// newline. The dispatcher appends one if the renderer did not.
    pub fn is_major(&self) -> bool {
        matches!(
            self,
            NodeKind::SourceFile
                | NodeKind::ModuleDeclaration
                | NodeKind::PortDeclaration
                | NodeKind::NetDeclaration
                | NodeKind::RegDeclaration
                | NodeKind::IntegerDeclaration
                | NodeKind::ParameterDeclaration
                | NodeKind::LocalparamDeclaration
                | NodeKind::ModuleInstantiation
                | NodeKind::ContinuousAssign
                | NodeKind::AlwaysConstruct
                | NodeKind::InitialConstruct
                | NodeKind::SeqBlock
                | NodeKind::ConditionalStatement
                | NodeKind::LoopStatement
                | NodeKind::BlockingAssignment
                | NodeKind::NonblockingAssignment
                | NodeKind::Statement
        )
    }

    /// Inline kinds are rendered as part of some enclosing line and never
    /// have a newline forced on them.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Expression
                | NodeKind::HierarchicalIdentifier
                | NodeKind::Select
                | NodeKind::PackedRange
                | NodeKind::EventControl
                | NodeKind::NetAssignment
                | NodeKind::ParamAssignment
                | NodeKind::AnsiPortDeclaration
                | NodeKind::NamedPortConnection
                | NodeKind::OrderedPortConnection
                | NodeKind::NamedParameterAssignment
                | NodeKind::OrderedParameterAssignment
        )
    }
}
