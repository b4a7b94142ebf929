/// The closed set of AST node kinds produced by the lowering pass.
///
/// Leaf-bearing terminals first, then rule-derived structural kinds.
/// `PropPivot`/`PropPivotOut` back `operrelprop_pivot`/`operrelprop_join`'s
/// custom lowering (see DESIGN.md).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // -- leaf-bearing terminals --
    AbsProp,
    Const,
    TagMatch,
    TagName,
    BreakOper,
    ContinueOper,

    // -- structural / rule-derived --
    AbsPropCond,
    AndCond,
    SubqCond,
    DollarExpr,
    EditNodeAdd,
    EditParens,
    EditPropDel,
    EditPropSet,
    EditTagAdd,
    EditTagDel,
    EditTagPropSet,
    EditTagPropDel,
    EditUnivDel,
    ExprNode,
    UnaryExprNode,
    FiltOper,
    ForLoop,
    WhileLoop,
    FormPivot,
    PivotOut,
    PivotIn,
    PivotInFrom,
    PivotToTags,
    HasAbsPropCond,
    HasRelPropCond,
    HasTagPropCond,
    IfStmt,
    IfClause,
    CallKwarg,
    LiftTag,
    LiftFormTag,
    LiftProp,
    LiftPropBy,
    LiftTagTag,
    LiftTagProp,
    LiftFormTagProp,
    LiftOnlyTagProp,
    NotCond,
    VarListSetOper,
    OrCond,
    Query,
    RelProp,
    RelPropCond,
    RelPropValue,
    TagCond,
    TagValue,
    TagPropValue,
    TagValuCond,
    TagPropCond,
    VarSetOper,
    VarDeref,
    VarEvalOper,
    VarValue,
    UnivProp,
    UnivPropValue,
    FuncCall,
    CallArgs,
    CallKwargs,
    CaseEntry,
    SwitchCase,
    SubQuery,
    List,
    VarList,
    CmdOper,
    TagProp,
    FormTagProp,
    OnlyTagProp,

    // -- relative-property pivots/joins --
    PropPivot,
    PropPivotOut,
}
